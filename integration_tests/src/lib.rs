//! Cross-contract scenarios for the condominium treasury live in `tests/`.
