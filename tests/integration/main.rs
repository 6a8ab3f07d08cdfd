//! End-to-end tests against mock storefronts

mod harvest_tests;
