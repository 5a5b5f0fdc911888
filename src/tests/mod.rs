// Tests module
// Resolution invariants: exact-version lookup, gated parameters, fatal unknowns
// Determinism: repeated and concurrent resolution, property tests over all u64
