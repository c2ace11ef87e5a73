use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Origin of every counter, 1970-01-01T00:00:00Z.
pub const EPOCH: SystemTime = UNIX_EPOCH;

/// Whole seconds between the unix epoch and `date`, floored.
/// Instants before 1970 come out negative.
pub fn unix_time(date: SystemTime) -> i64 {
  match date.duration_since(UNIX_EPOCH) {
    Ok(n) => n.as_secs() as i64,
    Err(e) => {
      let before = e.duration();
      let secs = before.as_secs() as i64;
      if before.subsec_nanos() > 0 { -secs - 1 } else { -secs }
    }
  }
}

/// Number of whole `time_step` windows elapsed between [`EPOCH`] and `now`.
///
/// `time_step` must be positive, the factory refuses anything else at construction.
pub fn time_counter(now: SystemTime, time_step: i64) -> i64 {
  counter_from_unix(unix_time(now), time_step)
}

pub fn counter_from_unix(now: i64, time_step: i64) -> i64 {
  let origin = unix_time(EPOCH);
  (now - origin).div_euclid(time_step)
}

/// Unix second at which window `counter` ends, `None` past the last window `i64` can hold.
pub fn window_end(counter: i64, time_step: i64) -> Option<i64> {
  counter.checked_add(1)?.checked_mul(time_step)
}

pub fn from_unix(secs: i64) -> SystemTime {
  if secs >= 0 {
    UNIX_EPOCH + Duration::from_secs(secs as u64)
  } else {
    UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs())
  }
}
