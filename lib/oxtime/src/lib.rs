#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod algebra;
mod declaration;
mod entity;
mod error;
mod registry;
pub mod vocabulary;

pub use crate::algebra::{AllenRelation, IntervalAlgebra, ResolvedInterval, TemporalView};
pub use crate::declaration::{declare_instant_feature, declare_interval_feature};
pub use crate::entity::{
    DateTimeDescription, DurationDescription, InstantPosition, IntervalExtent, TimeDuration,
    TimeInstant, TimeInterval,
};
pub use crate::error::{RegistryError, TimeError, TimeResult};
pub use crate::registry::{ReferenceSystem, TimeRegistry, TimeUnit, UnitType};
