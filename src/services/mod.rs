//! Service layer
//!
//! Business logic coordinating the domain ports.

pub mod credential_verifier;

pub use credential_verifier::{
    report_environment, CredentialVerifier, StoragePaths, VerificationReport, CANDIDATE_CAUSES,
};
