use chrono::Datelike;

pub fn copyright_year<D: Datelike>(today: &D) -> i32 {
    today.year()
}
