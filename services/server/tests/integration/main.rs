mod helpers;

mod office_test;
mod user_test;
