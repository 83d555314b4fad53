//! The claim ledger
//!
//! Storage and indexing for claim records. The caller decides who may
//! submit and adjudicate and whether the referenced policy accepts claims;
//! the ledger enforces the record-level rules: sequential ids, append-only
//! indexes, one-shot adjudication.

use std::collections::HashMap;

use core_kernel::{ClaimId, IdSequence, Identity, PolicyId};

use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;

/// Ledger of every claim ever submitted.
///
/// Ids are allocated 1, 2, 3, ... in submission order and never reused. The
/// per-claimant index is append-only and insertion-ordered; adjudicated
/// claims remain in both the map and the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimLedger {
    sequence: IdSequence,
    claims: HashMap<ClaimId, Claim>,
    by_claimant: HashMap<Identity, Vec<ClaimId>>,
}

impl ClaimLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a freshly submitted claim and returns the record.
    ///
    /// The claim starts in `Submitted`. The caller has already verified
    /// that `claimant` is a registered user holding the active policy
    /// `policy_id`.
    pub fn submit_claim(
        &mut self,
        claimant: Identity,
        policy_id: PolicyId,
        description: String,
        amount: u64,
    ) -> &Claim {
        let id = ClaimId::new(self.sequence.allocate());
        let claim = Claim::submit(id, policy_id, claimant.clone(), description, amount);
        self.by_claimant.entry(claimant).or_default().push(id);
        tracing::debug!(claim_id = %id, policy_id = %policy_id, "claim submitted");
        self.claims.entry(id).or_insert(claim)
    }

    /// Overwrites the status of the pending claim `claim_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimError::ClaimNotFound`] when no such claim was ever
    /// submitted, and [`ClaimError::ClaimNotPending`] when the claim has
    /// already been adjudicated. The record is untouched on error.
    pub fn update_status(
        &mut self,
        claim_id: ClaimId,
        new_status: ClaimStatus,
    ) -> Result<&Claim, ClaimError> {
        let claim = self
            .claims
            .get_mut(&claim_id)
            .ok_or(ClaimError::ClaimNotFound(claim_id))?;
        claim.adjudicate(new_status)?;
        tracing::debug!(claim_id = %claim_id, status = %new_status, "claim adjudicated");
        Ok(claim)
    }

    /// Returns the claim with `claim_id`, if it was ever submitted.
    pub fn get(&self, claim_id: ClaimId) -> Option<&Claim> {
        self.claims.get(&claim_id)
    }

    /// Returns the ids of every claim ever submitted by `claimant`, oldest
    /// first. Adjudicated claims stay in the list; identities with no
    /// claims yield an empty slice.
    pub fn claims_of(&self, claimant: &Identity) -> &[ClaimId] {
        self.by_claimant.get(claimant).map_or(&[], Vec::as_slice)
    }

    /// Number of claims ever submitted.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether no claim has ever been submitted.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}
