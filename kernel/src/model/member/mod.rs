use serde::{Deserialize, Serialize};
use shared::error::AppError;

use super::id::MemberId;

pub mod event;

/// 未返却の延滞がこの冊数に達した会員は貸出停止になる
pub const SUSPENSION_OVERDUE_THRESHOLD: i64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub membership_number: String,
    pub status: MemberStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Active,
    Suspended,
}

impl MemberStatus {
    /// 延滞数と未払い罰金数から会員ステータスを導出する。
    /// ステータス列に直接書き込むのはこの結果だけ。
    pub fn derive(overdue_loans: i64, unpaid_fines: i64) -> Self {
        if overdue_loans >= SUSPENSION_OVERDUE_THRESHOLD || unpaid_fines > 0 {
            MemberStatus::Suspended
        } else {
            MemberStatus::Active
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Suspended => "suspended",
        }
    }
}

impl std::str::FromStr for MemberStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MemberStatus::Active),
            "suspended" => Ok(MemberStatus::Suspended),
            other => Err(AppError::ConversionEntityError(format!(
                "unknown member status: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, MemberStatus::Active)]
    #[case(2, 0, MemberStatus::Active)]
    #[case(3, 0, MemberStatus::Suspended)]
    #[case(0, 1, MemberStatus::Suspended)]
    #[case(4, 2, MemberStatus::Suspended)]
    fn derive_follows_suspension_rule(
        #[case] overdue: i64,
        #[case] unpaid: i64,
        #[case] expected: MemberStatus,
    ) {
        assert_eq!(MemberStatus::derive(overdue, unpaid), expected);
    }
}
