use garde::Validate;
use kernel::model::{
    id::MemberId,
    member::{
        event::{CreateMember, UpdateMember},
        Member, MemberStatus,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub membership_number: String,
    #[garde(skip)]
    pub status: Option<MemberStatus>,
}

impl From<CreateMemberRequest> for CreateMember {
    fn from(value: CreateMemberRequest) -> Self {
        let CreateMemberRequest {
            name,
            email,
            membership_number,
            status,
        } = value;
        Self {
            name,
            email,
            membership_number,
            status,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(inner(email))]
    pub email: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub membership_number: Option<String>,
    #[garde(skip)]
    pub status: Option<MemberStatus>,
}

impl From<(MemberId, UpdateMemberRequest)> for UpdateMember {
    fn from((member_id, value): (MemberId, UpdateMemberRequest)) -> Self {
        let UpdateMemberRequest {
            name,
            email,
            membership_number,
            status,
        } = value;
        Self {
            member_id,
            name,
            email,
            membership_number,
            status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub membership_number: String,
    pub status: MemberStatus,
}

impl From<Member> for MemberResponse {
    fn from(value: Member) -> Self {
        let Member {
            id,
            name,
            email,
            membership_number,
            status,
        } = value;
        Self {
            id,
            name,
            email,
            membership_number,
            status,
        }
    }
}
