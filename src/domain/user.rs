//! Users, roles and credentials.

use serde::{Deserialize, Serialize};

/// Portal roles. Closed set - an unknown wire value is a deserialization
/// error, not a default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "customer")]
    Customer,
    #[serde(rename = "admin")]
    Admin,
    // The backend serializes this role as "courrier"; keep the wire form and
    // accept the conventional spelling too.
    #[serde(rename = "courrier", alias = "courier")]
    Courier,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
            Role::Courier => "courrier",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Admin => "Administrator",
            Role::Courier => "Courier",
        }
    }
}

/// Profile fields cached alongside the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uuid: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The persisted pairing of user profile and bearer token. This is the one
/// blob the session store holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub user: UserProfile,
    pub token: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/login` and `POST /auth/renew` responses: the profile
/// flattened next to the token.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub uuid: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub token: String,
}

impl From<LoginResponse> for Credential {
    fn from(response: LoginResponse) -> Self {
        Credential {
            user: UserProfile {
                uuid: response.uuid,
                email: response.email,
                first_name: response.first_name,
                last_name: response.last_name,
                role: response.role,
            },
            token: response.token,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub document_type: String,
    pub document_number: String,
    pub phone_number: String,
}

/// Body of `POST /auth/register` responses. Registration does not log the
/// user in, so no token is involved.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    #[serde(default)]
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub email_verified: bool,
}
