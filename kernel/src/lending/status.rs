use shared::error::AppResult;

use crate::{
    model::{id::MemberId, member::MemberStatus},
    store::StoreTx,
};

/// 現在の延滞数と未払い罰金数から会員ステータスを計算し直して保存する。
/// 純粋な射影なので何度呼んでも結果は変わらない。
pub(crate) async fn recompute_member_status(
    tx: &mut dyn StoreTx,
    member_id: MemberId,
) -> AppResult<MemberStatus> {
    let overdue_loans = tx.count_overdue_loans(member_id).await?;
    let unpaid_fines = tx.count_unpaid_fines(member_id).await?;

    let status = MemberStatus::derive(overdue_loans, unpaid_fines);
    tx.update_member_status(member_id, status).await?;
    Ok(status)
}
