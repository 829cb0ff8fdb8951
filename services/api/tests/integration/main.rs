mod helpers;

mod professionals_test;
mod submit_test;
