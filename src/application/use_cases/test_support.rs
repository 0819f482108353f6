//! In-memory repository used by use case tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::models::device::{Device, DeviceId, DeviceStatus, NewDevice};
use crate::domain::models::gateway::{Gateway, GatewayId};
use crate::domain::ports::{DeviceRepository, GatewayRepository};
use crate::shared::errors::RepositoryError;

#[derive(Default)]
struct State {
    gateways: Vec<Gateway>,
    devices: Vec<Device>,
    last_device_id: i64,
}

/// Implements both repository ports over plain vectors
#[derive(Default)]
pub(crate) struct InMemoryRepository {
    state: Mutex<State>,
    failing: AtomicBool,
}

impl InMemoryRepository {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every subsequent call fail with a database error
    pub(crate) fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub(crate) fn seed_gateway(&self, name: &str, ipv4: &str) -> Gateway {
        let gateway = Gateway::new(GatewayId::new(), name.to_string(), ipv4.to_string());
        self.state.lock().unwrap().gateways.push(gateway.clone());
        gateway
    }

    pub(crate) fn seed_devices(&self, gateway_id: &GatewayId, count: usize) -> Vec<Device> {
        let mut state = self.state.lock().unwrap();
        (0..count)
            .map(|i| {
                state.last_device_id += 1;
                let device = Device::restore(
                    DeviceId::from_i64(state.last_device_id),
                    format!("Vendor {i}"),
                    DeviceStatus::Offline,
                    gateway_id.clone(),
                    chrono::Utc::now(),
                );
                state.devices.push(device.clone());
                device
            })
            .collect()
    }

    pub(crate) fn gateways(&self) -> Vec<Gateway> {
        self.state.lock().unwrap().gateways.clone()
    }

    pub(crate) fn devices(&self) -> Vec<Device> {
        self.state.lock().unwrap().devices.clone()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GatewayRepository for InMemoryRepository {
    async fn list_gateways(&self) -> Result<Vec<Gateway>, RepositoryError> {
        self.check()?;
        Ok(self.gateways())
    }

    async fn get_gateway(&self, id: &GatewayId) -> Result<Option<Gateway>, RepositoryError> {
        self.check()?;
        Ok(self.gateways().into_iter().find(|g| g.id() == id))
    }

    async fn insert_gateway(&self, gateway: &Gateway) -> Result<(), RepositoryError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        if state.gateways.iter().any(|g| g.id() == gateway.id()) {
            return Err(RepositoryError::Duplicate(gateway.id().to_string()));
        }
        state.gateways.push(gateway.clone());
        Ok(())
    }

    async fn update_gateway(&self, gateway: &Gateway) -> Result<bool, RepositoryError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        match state.gateways.iter_mut().find(|g| g.id() == gateway.id()) {
            Some(stored) => {
                *stored = gateway.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_gateway(&self, id: &GatewayId) -> Result<bool, RepositoryError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        let before = state.gateways.len();
        state.gateways.retain(|g| g.id() != id);
        Ok(state.gateways.len() < before)
    }
}

#[async_trait]
impl DeviceRepository for InMemoryRepository {
    async fn list_devices(&self) -> Result<Vec<Device>, RepositoryError> {
        self.check()?;
        Ok(self.devices())
    }

    async fn list_devices_by_gateway(&self, gateway_id: &GatewayId) -> Result<Vec<Device>, RepositoryError> {
        self.check()?;
        Ok(self
            .devices()
            .into_iter()
            .filter(|d| d.gateway_id() == gateway_id)
            .collect())
    }

    async fn count_devices_by_gateway(&self, gateway_id: &GatewayId) -> Result<i64, RepositoryError> {
        let devices = self.list_devices_by_gateway(gateway_id).await?;
        Ok(i64::try_from(devices.len()).unwrap_or(i64::MAX))
    }

    async fn get_device(&self, id: DeviceId) -> Result<Option<Device>, RepositoryError> {
        self.check()?;
        Ok(self.devices().into_iter().find(|d| d.id() == id))
    }

    async fn insert_device(&self, device: &NewDevice) -> Result<DeviceId, RepositoryError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.last_device_id += 1;
        let id = DeviceId::from_i64(state.last_device_id);
        state.devices.push(Device::restore(
            id,
            device.vendor.clone(),
            device.status,
            device.gateway_id.clone(),
            device.created,
        ));
        Ok(id)
    }

    async fn update_device(&self, device: &Device) -> Result<bool, RepositoryError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        match state.devices.iter_mut().find(|d| d.id() == device.id()) {
            Some(stored) => {
                *stored = device.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_device(&self, id: DeviceId) -> Result<bool, RepositoryError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        let before = state.devices.len();
        state.devices.retain(|d| d.id() != id);
        Ok(state.devices.len() < before)
    }
}
