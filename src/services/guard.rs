//! Guarded assignment shared by the entity's write accessors.
//!
//! An empty string means "unset" for every guarded slot.

/// Stores `candidate` only while `slot` is still empty.
pub fn assign_if_empty(slot: &mut String, candidate: &str) -> bool {
    if !slot.is_empty() || candidate.is_empty() {
        return false;
    }
    slot.push_str(candidate);
    true
}

/// Stores a non-empty `candidate`, replacing whatever `slot` held.
///
/// Returns `false` when the candidate is empty or equal to the current value.
pub fn assign_if_present(slot: &mut String, candidate: &str) -> bool {
    if candidate.is_empty() || slot == candidate {
        return false;
    }
    slot.clear();
    slot.push_str(candidate);
    true
}
