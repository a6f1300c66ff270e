//! Wire representations of the platform's REST resources.
//!
//! Every resource struct mirrors the platform's JSON representation: fields
//! are optional so the same type serves for creation bodies, partial
//! updates, and full server responses. Fragment-based resources keep
//! unknown top-level keys in a `fragments` map via `#[serde(flatten)]`.
//!
//! Each resource also declares the top-level fields the server manages in
//! a `READ_ONLY_FIELDS` constant. Those are stripped from outgoing bodies
//! before transmission, so a struct fetched from the platform can be
//! modified and sent back as-is.

pub mod alarm;
pub mod application;
pub mod certificate;
pub mod common;
pub mod event;
pub mod group;
pub mod managed_object;
pub mod measurement;
pub mod operation;
pub mod tenant;
pub mod user;

pub use alarm::{Alarm, AlarmCollection, AlarmSeverity, AlarmStatus};
pub use application::{Application, ApplicationCollection};
pub use certificate::{TrustedCertificate, TrustedCertificateCollection};
pub use common::{PageStatistics, Source};
pub use event::{Event, EventCollection};
pub use group::{Group, GroupCollection, Role, RoleCollection};
pub use managed_object::{
    ManagedObject, ManagedObjectCollection, ManagedObjectReference,
    ManagedObjectReferenceCollection,
};
pub use measurement::{Measurement, MeasurementCollection};
pub use operation::{Operation, OperationCollection, OperationStatus};
pub use tenant::{CurrentTenant, Tenant, TenantCollection};
pub use user::{CurrentUser, User, UserCollection};
