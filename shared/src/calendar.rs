use chrono::{DateTime, Duration, NaiveTime, Utc};

/// 指定した日数だけ後の時刻を返す。
pub fn add_days(ts: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    ts + Duration::days(days)
}

/// その日の 0 時ちょうどに切り捨てる。
pub fn truncate_to_day(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// 2 つの時刻の暦日差。時刻は無視し、日付境界（深夜 0 時）だけで数える。
/// 延滞日数の計算に使うため、経過時間ではなく暦の上での日数を返す。
pub fn days_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> i64 {
    (truncate_to_day(later) - truncate_to_day(earlier)).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn add_days_covers_loan_period() {
        let borrowed_at = at(2023, 1, 1, 9, 30);
        assert_eq!(add_days(borrowed_at, 14), at(2023, 1, 15, 9, 30));
    }

    #[rstest]
    #[case(at(2023, 1, 18, 10, 0), at(2023, 1, 15, 23, 59), 3)]
    #[case(at(2023, 1, 5, 0, 0), at(2023, 1, 1, 12, 0), 4)]
    // 同じ日のうちは、時刻がどれだけ離れていても 0 日
    #[case(at(2023, 1, 15, 23, 59), at(2023, 1, 15, 0, 0), 0)]
    // 日付をまたげば、経過時間が数分でも 1 日
    #[case(at(2023, 1, 16, 0, 1), at(2023, 1, 15, 23, 59), 1)]
    #[case(at(2023, 3, 1, 6, 0), at(2023, 2, 27, 18, 0), 2)]
    fn days_between_counts_calendar_days(
        #[case] later: DateTime<Utc>,
        #[case] earlier: DateTime<Utc>,
        #[case] expected: i64,
    ) {
        assert_eq!(days_between(later, earlier), expected);
    }

    #[test]
    fn truncate_to_day_drops_time_of_day() {
        assert_eq!(truncate_to_day(at(2023, 1, 18, 10, 45)), at(2023, 1, 18, 0, 0));
    }
}
