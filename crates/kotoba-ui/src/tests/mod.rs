pub(crate) mod fakes;

mod engine_tests;
