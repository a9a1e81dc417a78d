//! Device registry facet.

use pushdeer_core::api::ApiOperation;
use pushdeer_core::device::DeviceInfo;
use pushdeer_core::error::Result;

use super::Orchestrator;

impl Orchestrator {
    /// Registers `device` and installs the returned device collection as-is.
    ///
    /// # Returns
    ///
    /// The entry whose `device_id` matches the submitted device, or `None`
    /// when the service response does not include it.
    pub async fn register_device(&self, device: &DeviceInfo) -> Result<Option<DeviceInfo>> {
        let token = self.state.token();
        let devices = self
            .call(ApiOperation::DeviceReg, self.api.device_reg(&token, device))
            .await?
            .devices;

        let registered = devices
            .iter()
            .find(|entry| entry.device_id == device.device_id)
            .cloned();
        self.state.replace_devices(devices);

        if registered.is_none() {
            tracing::warn!(
                "Device {} missing from registration response",
                device.device_id
            );
        }
        Ok(registered)
    }

    /// Fetches every device and installs them newest-first.
    pub async fn list_devices(&self) -> Result<Vec<DeviceInfo>> {
        let token = self.state.token();
        let mut devices = self
            .call(ApiOperation::DeviceList, self.api.device_list(&token))
            .await?
            .devices;

        devices.reverse();
        self.state.replace_devices(devices.clone());
        Ok(devices)
    }

    /// Returns true if no cached device carries this device's identity.
    ///
    /// Only consults the cache and the settings store.
    pub async fn needs_registration(&self) -> bool {
        let this_device_id = self.settings.this_device_id().await;
        !self.state.has_device(&this_device_id)
    }

    /// Removes a device by server id, then re-lists.
    ///
    /// The re-list runs whenever the service answered. A rejected removal is
    /// returned after the re-list; a transport failure skips it.
    pub async fn remove_device(&self, id: i64) -> Result<Vec<DeviceInfo>> {
        let token = self.state.token();
        let rejection = self
            .call_settled(ApiOperation::DeviceRemove, self.api.device_remove(&token, id))
            .await?;
        tracing::debug!("Device {} removal answered", id);

        let devices = self.list_devices().await;
        match rejection {
            Some(err) => Err(err),
            None => devices,
        }
    }

    /// Renames a device on the server.
    ///
    /// The cached entry keeps its old name until the next [`list_devices`].
    /// A rejection comes back as [`PushDeerError::Service`], distinct from a
    /// transport failure; both are recorded.
    ///
    /// [`PushDeerError::Service`]: pushdeer_core::error::PushDeerError::Service
    ///
    /// [`list_devices`]: Self::list_devices
    pub async fn rename_device(&self, device: &DeviceInfo) -> Result<()> {
        let token = self.state.token();
        self.call_ack(
            ApiOperation::DeviceRename,
            self.api.device_rename(&token, device.id, &device.name),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{Fixture, THIS_DEVICE, device};
    use pushdeer_core::api::ApiOperation;
    use pushdeer_core::device::DeviceInfo;
    use pushdeer_core::error::PushDeerError;
    use pushdeer_core::testing::{BAD_ARGUMENT_CODE, FakePushDeerApi};

    #[tokio::test]
    async fn test_register_installs_response_in_order() {
        let fixture =
            Fixture::signed_in(FakePushDeerApi::new().with_devices(vec![device(9, "9")])).await;
        // Server answers [9, 5]; registration keeps response order.
        let registered = fixture
            .orchestrator
            .register_device(&DeviceInfo::new("phone", "5"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(registered.device_id, "5");
        let cached: Vec<String> = fixture
            .orchestrator
            .devices()
            .into_iter()
            .map(|d| d.device_id)
            .collect();
        assert_eq!(cached, vec!["9".to_string(), "5".to_string()]);
    }

    #[tokio::test]
    async fn test_register_returns_matching_entry() {
        let fixture = Fixture::signed_in(
            FakePushDeerApi::new().with_devices(vec![device(5, "5"), device(9, "9")]),
        )
        .await;

        let registered = fixture
            .orchestrator
            .register_device(&device(5, "5"))
            .await
            .unwrap();

        assert_eq!(registered, Some(device(5, "5")));
        assert_eq!(
            fixture.orchestrator.devices(),
            vec![device(5, "5"), device(9, "9")]
        );
    }

    #[tokio::test]
    async fn test_register_failure_keeps_cache() {
        let fixture =
            Fixture::signed_in(FakePushDeerApi::new().with_devices(vec![device(1, "a")])).await;
        fixture.orchestrator.list_devices().await.unwrap();
        fixture
            .api
            .fail(ApiOperation::DeviceReg, PushDeerError::transport("offline"));

        let result = fixture
            .orchestrator
            .register_device(&DeviceInfo::new("phone", THIS_DEVICE))
            .await;

        assert!(result.is_err());
        assert_eq!(fixture.orchestrator.devices(), vec![device(1, "a")]);
        assert_eq!(fixture.log.error_entries(), vec!["deviceReg".to_string()]);
    }

    #[tokio::test]
    async fn test_list_devices_reverses_latest_response() {
        let fixture = Fixture::signed_in(
            FakePushDeerApi::new().with_devices(vec![device(1, "a"), device(2, "b")]),
        )
        .await;
        fixture.orchestrator.list_devices().await.unwrap();

        fixture
            .api
            .set_devices(vec![device(3, "c"), device(4, "d"), device(5, "e")]);
        let listed = fixture.orchestrator.list_devices().await.unwrap();

        let expected = vec![device(5, "e"), device(4, "d"), device(3, "c")];
        assert_eq!(listed, expected);
        assert_eq!(fixture.orchestrator.devices(), expected);
    }

    #[tokio::test]
    async fn test_list_devices_accepts_empty_result() {
        let fixture =
            Fixture::signed_in(FakePushDeerApi::new().with_devices(vec![device(1, "a")])).await;
        fixture.orchestrator.list_devices().await.unwrap();

        fixture.api.set_devices(Vec::new());
        fixture.orchestrator.list_devices().await.unwrap();

        assert!(fixture.orchestrator.devices().is_empty());
    }

    #[tokio::test]
    async fn test_list_devices_notifies_subscribers() {
        let fixture =
            Fixture::signed_in(FakePushDeerApi::new().with_devices(vec![device(1, "a")])).await;
        let mut receiver = fixture.orchestrator.subscribe_devices();

        fixture.orchestrator.list_devices().await.unwrap();

        receiver.changed().await.unwrap();
        assert_eq!(*receiver.borrow_and_update(), vec![device(1, "a")]);
    }

    #[tokio::test]
    async fn test_needs_registration_tracks_cache() {
        let fixture = Fixture::signed_in(FakePushDeerApi::new()).await;
        assert!(fixture.orchestrator.needs_registration().await);

        fixture
            .orchestrator
            .register_device(&DeviceInfo::new("phone", THIS_DEVICE))
            .await
            .unwrap();
        assert!(!fixture.orchestrator.needs_registration().await);

        let calls_before = fixture.api.calls().len();
        fixture.orchestrator.needs_registration().await;
        assert_eq!(fixture.api.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn test_remove_device_relists() {
        let fixture = Fixture::signed_in(
            FakePushDeerApi::new().with_devices(vec![device(1, "a"), device(2, "b")]),
        )
        .await;
        fixture.orchestrator.list_devices().await.unwrap();

        let remaining = fixture.orchestrator.remove_device(1).await.unwrap();

        assert_eq!(remaining, vec![device(2, "b")]);
        assert!(!fixture.orchestrator.devices().iter().any(|d| d.id == 1));
        assert_eq!(
            fixture.api.calls(),
            vec![
                ApiOperation::DeviceList,
                ApiOperation::DeviceRemove,
                ApiOperation::DeviceList
            ]
        );
    }

    #[tokio::test]
    async fn test_rejected_removal_still_relists() {
        let fixture =
            Fixture::signed_in(FakePushDeerApi::new().with_devices(vec![device(1, "a")])).await;

        let err = fixture.orchestrator.remove_device(42).await.unwrap_err();

        assert_eq!(
            err,
            PushDeerError::service(BAD_ARGUMENT_CODE, "device not found")
        );
        assert_eq!(
            fixture.api.calls(),
            vec![ApiOperation::DeviceRemove, ApiOperation::DeviceList]
        );
        assert_eq!(fixture.orchestrator.devices(), vec![device(1, "a")]);
        assert_eq!(fixture.log.error_entries(), vec!["deviceRemove".to_string()]);
    }

    #[tokio::test]
    async fn test_rejected_removal_installs_server_state() {
        let fixture = Fixture::signed_in(
            FakePushDeerApi::new().with_devices(vec![device(1, "a"), device(2, "b")]),
        )
        .await;
        fixture.orchestrator.list_devices().await.unwrap();
        fixture.api.set_devices(vec![device(2, "b")]);
        fixture
            .api
            .reject(ApiOperation::DeviceRemove, BAD_ARGUMENT_CODE, "busy");

        assert!(fixture.orchestrator.remove_device(1).await.is_err());

        assert_eq!(fixture.orchestrator.devices(), vec![device(2, "b")]);
    }

    #[tokio::test]
    async fn test_transport_failure_skips_relist() {
        let fixture =
            Fixture::signed_in(FakePushDeerApi::new().with_devices(vec![device(1, "a")])).await;
        fixture
            .api
            .fail(ApiOperation::DeviceRemove, PushDeerError::transport("offline"));

        let err = fixture.orchestrator.remove_device(1).await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(fixture.api.calls(), vec![ApiOperation::DeviceRemove]);
        assert_eq!(fixture.log.error_entries(), vec!["deviceRemove".to_string()]);
    }

    #[tokio::test]
    async fn test_register_response_without_submitted_device() {
        let fixture =
            Fixture::signed_in(FakePushDeerApi::new().with_devices(vec![device(9, "9")])).await;
        fixture.api.ignore_registrations();

        let registered = fixture
            .orchestrator
            .register_device(&DeviceInfo::new("phone", "5"))
            .await
            .unwrap();

        assert_eq!(registered, None);
        assert_eq!(fixture.orchestrator.devices(), vec![device(9, "9")]);
        assert!(fixture.log.error_entries().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_rename_is_service_error() {
        let fixture =
            Fixture::signed_in(FakePushDeerApi::new().with_devices(vec![device(1, "a")])).await;
        fixture.orchestrator.list_devices().await.unwrap();

        let err = fixture
            .orchestrator
            .rename_device(&device(7, "x").renamed("ghost"))
            .await
            .unwrap_err();

        assert!(err.is_service());
        assert_eq!(fixture.orchestrator.devices(), vec![device(1, "a")]);
        assert_eq!(fixture.api.call_count(ApiOperation::DeviceList), 1);
        assert_eq!(fixture.log.error_entries(), vec!["deviceRename".to_string()]);
    }

    #[tokio::test]
    async fn test_rename_device_leaves_cache_stale() {
        let fixture =
            Fixture::signed_in(FakePushDeerApi::new().with_devices(vec![device(1, "a")])).await;
        fixture.orchestrator.list_devices().await.unwrap();

        fixture
            .orchestrator
            .rename_device(&device(1, "a").renamed("kitchen tablet"))
            .await
            .unwrap();

        assert_eq!(fixture.orchestrator.devices()[0].name, "device-1");
        assert_eq!(fixture.api.server_devices()[0].name, "kitchen tablet");

        fixture.orchestrator.list_devices().await.unwrap();
        assert_eq!(fixture.orchestrator.devices()[0].name, "kitchen tablet");
    }

    #[tokio::test]
    async fn test_concurrent_list_and_remove_settle_on_server_state() {
        let fixture = Fixture::signed_in(
            FakePushDeerApi::new().with_devices(vec![device(1, "a"), device(2, "b")]),
        )
        .await;

        let (listed, removed) = tokio::join!(
            fixture.orchestrator.list_devices(),
            fixture.orchestrator.remove_device(2)
        );
        listed.unwrap();
        removed.unwrap();

        // Either writer may land last; a final list converges on the server.
        fixture.orchestrator.list_devices().await.unwrap();
        assert_eq!(fixture.orchestrator.devices(), vec![device(1, "a")]);
    }
}
