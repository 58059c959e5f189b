//! Data models for the clinic backend's entities.
//!
//! This module contains the data structures exchanged with the REST API:
//!
//! - `Player`, `Division`: roster entities
//! - `Attention`: kinesiological (physiotherapy) visits
//! - `Injury`, `DailyState`: injury episodes and their rehabilitation log
//! - `UserAccount`, `UserSummary`: accounts and the logged-in user
//!
//! Wire field names follow the backend's Spanish JSON schema via serde
//! renames; display helpers translate choice codes to labels.

pub mod attention;
pub mod division;
pub mod injury;
pub mod player;
pub mod user;

pub use attention::{Attention, AttentionStatus, NewAttention};
pub use division::Division;
pub use injury::{
    DailyState, DaysRemaining, Injury, InjuryCondition, InjuryMechanism, InjurySeverity,
    InjuryType, NewInjury, SportPhase, StageOption, TreatmentStage,
};
pub use player::{HealthInsurance, Laterality, NewPlayer, Player};
pub use user::{LoginResponse, NewUser, Registration, UserAccount, UserProfile, UserSummary};
