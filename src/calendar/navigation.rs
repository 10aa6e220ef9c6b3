use super::Calendar;
use crate::date::Date;
use crate::error::Result;

impl Calendar {
    fn first_of_month(&self) -> Date {
        self.current.first_of_month()
    }

    /// Moves to day 1 of the following month.
    pub fn next_month(&mut self) -> Result<&mut Self> {
        let target = self.first_of_month().add_days(self.month_days)?;
        log::debug!("next month: {}", target);
        self.set_current(target)
    }

    /// Moves back by the length of the current month, counted from its
    /// first day.
    ///
    /// This lands on `1 + L(prev) - L(cur)` of the previous month, or in the
    /// month before that when the previous month is the shorter one. Use
    /// [`Calendar::first_of_previous_month`] to get day 1 instead.
    pub fn prev_month(&mut self) -> Result<&mut Self> {
        let target = self.first_of_month().sub_days(self.month_days)?;
        log::debug!("previous month: {}", target);
        self.set_current(target)
    }

    pub fn next_year(&mut self) -> Result<&mut Self> {
        self.set_current(format!("{}/01/01", self.year + 1))
    }

    pub fn prev_year(&mut self) -> Result<&mut Self> {
        self.set_current(format!("{}/01/01", self.year - 1))
    }

    pub fn first_of_previous_month(&self) -> Result<Date> {
        Ok(self.first_of_month().sub_days(1)?.first_of_month())
    }
}
