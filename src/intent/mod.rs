// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Deployment intent types.
//!
//! Defines the schema of the stage properties a pipeline author declares.

pub mod de;
pub mod enums;
pub mod types;

pub use enums::{
    Action, Kind, LoadBalanceAlgorithm, SidecarType, StrategyType, UpdateMode, Visibility,
};
pub use types::{
    AdditionalPort, AutoscaleSpec, ContainerSpec, DeploymentIntent, LifecycleSpec, MetricsSpec,
    MountSpec, ProbeSpec, RequestSpec, ResourceSpec, RollingUpdateSpec, SafetySpec, SidecarSpec,
    VpaSpec,
};
