use chrono::{DateTime, Utc};
use shared::error::AppResult;

use crate::{model::id::MemberId, store::StoreTx};

use super::recompute_member_status;

/// 期限を過ぎた未返却の貸出を overdue に倒し、影響を受けた会員の
/// ステータスを再計算する。対象行はロックしてから更新するため、
/// 同じトランザクション内のこの後の判定は常に最新の延滞状態を見る。
/// 新たに期限切れになった行がなければ何もしない（再実行しても安全）。
pub(crate) async fn refresh_overdue(tx: &mut dyn StoreTx, now: DateTime<Utc>) -> AppResult<()> {
    let due_loans = tx.lock_due_loans(now).await?;
    if due_loans.is_empty() {
        return Ok(());
    }

    let loan_ids: Vec<_> = due_loans.iter().map(|loan| loan.id).collect();
    tx.mark_loans_overdue(&loan_ids).await?;

    let mut member_ids: Vec<MemberId> = due_loans.iter().map(|loan| loan.member_id).collect();
    member_ids.sort_unstable();
    member_ids.dedup();
    for member_id in member_ids {
        recompute_member_status(tx, member_id).await?;
    }

    Ok(())
}
