use mockall::automock;

/// Clock abstraction so that services rendering the current date or time
/// can be tested against a fixed instant.
#[automock]
pub trait ClockService {
    fn time_now(&self) -> time::Time;
    fn date_now(&self) -> time::Date;
}
