use super::MemberStatus;
use crate::model::id::MemberId;

#[derive(Debug)]
pub struct CreateMember {
    pub name: String,
    pub email: String,
    pub membership_number: String,
    pub status: Option<MemberStatus>,
}

#[derive(Debug)]
pub struct UpdateMember {
    pub member_id: MemberId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub membership_number: Option<String>,
    pub status: Option<MemberStatus>,
}
