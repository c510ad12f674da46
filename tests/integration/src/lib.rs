//! Integration tests for the Provenant trust-and-provenance layer.

#[cfg(test)]
mod capability_gate_tests;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod trust_flow_tests;
