//! Drone service for registration, loading and queries.
//!
//! This module provides the `DroneService`, which owns the drone workflows:
//! registering drones with unique serial numbers, loading medications within a
//! drone's weight limit, and the read-only queries over drones and their payloads.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::BaseResponse,
        drone::{BatteryAuditDto, BatteryLevelDto, DroneDto, FetchLoadedMedicationsDto},
    },
    server::{
        data::{
            battery_audit::BatteryAuditRepository,
            drone::DroneRepository,
            media::MediaRepository,
            medication::MedicationRepository,
            store::{BatteryAuditRecorder, DroneStore, MediaStore, MedicationStore},
        },
        error::{drone::DroneError, AppError},
        model::{
            battery_audit::BatteryAudit,
            drone::{Drone, DroneState, LoadDroneParams, RegisterDroneParams},
            medication::NewMedication,
        },
    },
};

pub const DRONE_REGISTERED_MESSAGE: &str = "drone registered successfully";
pub const DRONE_LOADED_MESSAGE: &str = "drone loaded successfully";
pub const AVAILABLE_DRONES_MESSAGE: &str = "fetched available drones successfully";

/// Service providing the drone workflows.
///
/// Generic over the four stores it depends on so tests can substitute in-memory
/// implementations. `DroneService::new` wires the SeaORM repositories.
pub struct DroneService<D, M, I, A> {
    drones: D,
    medications: M,
    media: I,
    audits: A,
}

impl<'a>
    DroneService<
        DroneRepository<'a>,
        MedicationRepository<'a>,
        MediaRepository<'a>,
        BatteryAuditRepository<'a>,
    >
{
    /// Creates a new DroneService backed by the database.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DroneService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_stores(
            DroneRepository::new(db),
            MedicationRepository::new(db),
            MediaRepository::new(db),
            BatteryAuditRepository::new(db),
        )
    }
}

impl<D, M, I, A> DroneService<D, M, I, A>
where
    D: DroneStore,
    M: MedicationStore,
    I: MediaStore,
    A: BatteryAuditRecorder,
{
    /// Creates a DroneService from explicit store implementations.
    pub fn with_stores(drones: D, medications: M, media: I, audits: A) -> Self {
        Self {
            drones,
            medications,
            media,
            audits,
        }
    }

    /// Registers a new drone in the idle state.
    ///
    /// Rejects the request before any write when the serial number is taken.
    ///
    /// # Arguments
    /// - `params` - Validated registration parameters
    ///
    /// # Returns
    /// - `Ok(BaseResponse<DroneDto>)` - The registered drone
    /// - `Err(AppError::DroneErr(AlreadyExists))` - Serial number already registered
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn register_drone(
        &self,
        params: RegisterDroneParams,
    ) -> Result<BaseResponse<DroneDto>, AppError> {
        if self
            .drones
            .exists_by_serial_number(&params.serial_number)
            .await?
        {
            return Err(DroneError::AlreadyExists {
                serial_number: params.serial_number,
            }
            .into());
        }

        let drone = self.drones.create(params.into_new_drone()).await?;

        tracing::info!(
            "Registered {} drone {} with id {}",
            drone.model,
            drone.serial_number,
            drone.id
        );

        Ok(BaseResponse::success(
            DRONE_REGISTERED_MESSAGE,
            drone.into_dto(),
        ))
    }

    /// Loads a medication onto a drone.
    ///
    /// The drone must match both `drone_id` and the request's serial number, and be
    /// `IDLE`, `LOADING` or `LOADED`. The medication is only attached if the drone's total payload stays within its weight
    /// limit; on success the drone moves to `LOADED` and its battery level is audited.
    /// All checks run before the first write.
    ///
    /// # Arguments
    /// - `drone_id` - ID of the drone to load
    /// - `params` - Validated medication parameters
    ///
    /// # Returns
    /// - `Ok(BaseResponse<DroneDto>)` - The drone with its refreshed medications
    /// - `Err(AppError::DroneErr(NotFound))` - No drone with that id and serial number
    /// - `Err(AppError::DroneErr(NotLoadable))` - Drone is away on a delivery run
    /// - `Err(AppError::DroneErr(OverLoad))` - Payload would exceed the weight limit
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn load_drone(
        &self,
        drone_id: i32,
        params: LoadDroneParams,
    ) -> Result<BaseResponse<DroneDto>, AppError> {
        if !self
            .drones
            .exists_by_serial_number_and_id(&params.drone_serial_number, drone_id)
            .await?
        {
            return Err(DroneError::NotFound { drone_id }.into());
        }

        let mut drone = self
            .drones
            .find_by_id(drone_id)
            .await?
            .ok_or(DroneError::NotFound { drone_id })?;

        if !drone.state.accepts_payload() {
            return Err(DroneError::NotLoadable {
                drone_id,
                state: drone.state,
            }
            .into());
        }

        let requested_total = drone.loaded_weight() + params.medication_weight;
        if requested_total > drone.weight_limit {
            return Err(DroneError::OverLoad {
                drone_id,
                weight_limit: drone.weight_limit,
                requested_total,
            }
            .into());
        }

        let image_url = self.resolve_image_url(params.medication_image_id).await?;

        let medication = self
            .medications
            .save(NewMedication {
                drone_id,
                name: params.medication_name,
                code: params.medication_code,
                weight: params.medication_weight,
                image_url,
            })
            .await?;

        tracing::info!(
            "Loaded medication {} ({}g) onto drone {}, payload now {}g of {}g",
            medication.code,
            medication.weight,
            drone.serial_number,
            requested_total,
            drone.weight_limit
        );

        drone.medications.push(medication);
        drone.state = DroneState::Loaded;
        let drone = self.drones.save(&drone).await?;

        if let Err(e) = self.audits.record(&drone).await {
            tracing::error!(
                "Failed to record battery level for drone {}: {}",
                drone.id,
                e
            );
        }

        Ok(BaseResponse::success(DRONE_LOADED_MESSAGE, drone.into_dto()))
    }

    /// Returns the medications currently loaded on a drone.
    ///
    /// # Returns
    /// - `Ok(BaseResponse<FetchLoadedMedicationsDto>)` - Drone id, serial number and medications
    /// - `Err(AppError::DroneErr(NotFound))` - No drone with that id
    pub async fn get_loaded_medication(
        &self,
        drone_id: i32,
    ) -> Result<BaseResponse<FetchLoadedMedicationsDto>, AppError> {
        let drone = self
            .drones
            .find_with_medications_by_id(drone_id)
            .await?
            .ok_or(DroneError::NotFound { drone_id })?;

        tracing::debug!(
            "Drone {} carries {} medications",
            drone_id,
            drone.medications.len()
        );

        Ok(BaseResponse::success(
            format!(
                "fetched medications records successfully for drone with id {}",
                drone_id
            ),
            drone.into_loaded_medications_dto(),
        ))
    }

    /// Returns the drones that can still be loaded.
    ///
    /// A drone is available when its state accepts payloads and its loaded weight is
    /// below its weight limit.
    pub async fn get_available_drones(&self) -> Result<BaseResponse<Vec<DroneDto>>, AppError> {
        let drones: Vec<DroneDto> = self
            .drones
            .find_all()
            .await?
            .into_iter()
            .filter(Drone::is_available)
            .map(Drone::into_dto)
            .collect();

        tracing::debug!("{} drones available for loading", drones.len());

        Ok(BaseResponse::success(AVAILABLE_DRONES_MESSAGE, drones))
    }

    /// Returns the current battery level of a drone.
    ///
    /// # Returns
    /// - `Ok(BaseResponse<BatteryLevelDto>)` - Drone id, serial number and battery level
    /// - `Err(AppError::DroneErr(NotFound))` - No drone with that id
    pub async fn get_battery_level(
        &self,
        drone_id: i32,
    ) -> Result<BaseResponse<BatteryLevelDto>, AppError> {
        let drone = self
            .drones
            .find_by_id(drone_id)
            .await?
            .ok_or(DroneError::NotFound { drone_id })?;

        Ok(BaseResponse::success(
            format!(
                "fetched battery level successfully for drone with id {}",
                drone_id
            ),
            drone.into_battery_level_dto(),
        ))
    }

    /// Returns the recorded battery levels of a drone, newest first.
    ///
    /// # Returns
    /// - `Ok(BaseResponse<Vec<BatteryAuditDto>>)` - Audit entries of the drone
    /// - `Err(AppError::DroneErr(NotFound))` - No drone with that id
    pub async fn get_battery_audits(
        &self,
        drone_id: i32,
    ) -> Result<BaseResponse<Vec<BatteryAuditDto>>, AppError> {
        if self.drones.find_by_id(drone_id).await?.is_none() {
            return Err(DroneError::NotFound { drone_id }.into());
        }

        let audits = self
            .audits
            .find_by_drone_id(drone_id)
            .await?
            .into_iter()
            .map(BatteryAudit::into_dto)
            .collect();

        Ok(BaseResponse::success(
            format!(
                "fetched battery audit records successfully for drone with id {}",
                drone_id
            ),
            audits,
        ))
    }

    /// Resolves a media id to its URL.
    ///
    /// Unknown ids yield no image rather than an error.
    async fn resolve_image_url(&self, image_id: Option<i32>) -> Result<Option<String>, AppError> {
        let Some(image_id) = image_id else {
            return Ok(None);
        };

        match self.media.find_by_id(image_id).await? {
            Some(media) => Ok(Some(media.url)),
            None => {
                tracing::warn!("Media {} not found, loading medication without image", image_id);
                Ok(None)
            }
        }
    }
}
