use time::MonthKey;

/// 6 rows by 7 columns, enough for any month at any first-weekday offset.
pub const CALENDAR_CELLS: usize = 42;

/// Sunday-first month grid. Cells outside the month are `None`; cells inside
/// hold the 1-based day number. The grid is always exactly 42 cells so the
/// layout stays stable across months.
pub fn calendar_grid(month: MonthKey) -> [Option<u32>; CALENDAR_CELLS] {
    let mut cells = [None; CALENDAR_CELLS];
    let offset = time::sunday_index(month.first_day()) as usize;
    for day in 1..=month.days_in_month() {
        cells[offset + day as usize - 1] = Some(day);
    }
    cells
}
