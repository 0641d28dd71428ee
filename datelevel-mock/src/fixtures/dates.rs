//! Calendar constants used across tests and examples.

use chrono::NaiveDate;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid fixture date"),
    }
}

pub const DEC31_2021: NaiveDate = ymd(2021, 12, 31);
pub const JAN1_2022: NaiveDate = ymd(2022, 1, 1);
pub const JAN10_2022: NaiveDate = ymd(2022, 1, 10);
pub const JAN15_2022: NaiveDate = ymd(2022, 1, 15);
pub const JAN20_2022: NaiveDate = ymd(2022, 1, 20);
pub const JAN31_2022: NaiveDate = ymd(2022, 1, 31);
pub const FEB1_2022: NaiveDate = ymd(2022, 2, 1);
pub const FEB15_2022: NaiveDate = ymd(2022, 2, 15);
pub const FEB28_2022: NaiveDate = ymd(2022, 2, 28);
pub const MAR1_2022: NaiveDate = ymd(2022, 3, 1);
pub const MAR31_2022: NaiveDate = ymd(2022, 3, 31);
pub const APR1_2022: NaiveDate = ymd(2022, 4, 1);
pub const APR30_2022: NaiveDate = ymd(2022, 4, 30);
pub const MAY1_2022: NaiveDate = ymd(2022, 5, 1);
pub const JUN30_2022: NaiveDate = ymd(2022, 6, 30);
pub const DEC31_2022: NaiveDate = ymd(2022, 12, 31);
pub const JAN1_2023: NaiveDate = ymd(2023, 1, 1);
pub const DEC31_2023: NaiveDate = ymd(2023, 12, 31);
