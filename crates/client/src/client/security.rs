//! Role, user and permission methods for [`SupersetClient`].

use crate::client::SupersetClient;
use crate::endpoints::{self, ApiRequest, ApiResponse};
use crate::error::Result;
use crate::models::{AddPermissionsParams, CreateRoleParams, CreateUserParams, PermissionsPage};

impl SupersetClient {
    /// List all roles.
    pub async fn list_roles(&mut self) -> Result<ApiResponse> {
        let token = self.auth_token().await?;
        endpoints::list_roles(&self.http, &self.base_url, &token, self.timeout).await
    }

    /// List all users.
    pub async fn list_users(&mut self) -> Result<ApiResponse> {
        let token = self.auth_token().await?;
        endpoints::list_users(&self.http, &self.base_url, &token, self.timeout).await
    }

    /// List one page of permission/view-menu pairs.
    pub async fn list_permissions(&mut self, page: PermissionsPage) -> Result<ApiResponse> {
        let token = self.auth_token().await?;
        endpoints::list_permissions(&self.http, &self.base_url, &token, page, self.timeout).await
    }

    /// Create a user.
    pub async fn create_user(&mut self, params: &CreateUserParams) -> Result<ApiResponse> {
        let token = self.auth_token().await?;
        endpoints::create_user(&self.http, &self.base_url, &token, params, self.timeout).await
    }

    /// Create a role.
    pub async fn create_role(&mut self, params: &CreateRoleParams) -> Result<ApiResponse> {
        let token = self.auth_token().await?;
        endpoints::create_role(&self.http, &self.base_url, &token, params, self.timeout).await
    }

    /// Attach permission/view-menu ids to an existing role.
    pub async fn add_role_permissions(
        &mut self,
        role_id: i64,
        params: &AddPermissionsParams,
    ) -> Result<ApiResponse> {
        let token = self.auth_token().await?;
        endpoints::add_role_permissions(
            &self.http,
            &self.base_url,
            &token,
            role_id,
            params,
            self.timeout,
        )
        .await
    }

    /// Send an arbitrary authenticated request to `{base_url}{api_path}`.
    ///
    /// `headers` override the default JSON/bearer headers key by key.
    pub async fn request(
        &mut self,
        method: &str,
        api_path: &str,
        headers: &[(String, String)],
        data: Option<serde_json::Value>,
    ) -> Result<ApiResponse> {
        let token = self.auth_token().await?;

        let mut request = ApiRequest::new(method, format!("{}{}", self.base_url, api_path));
        for (name, value) in headers {
            request = request.header(name.clone(), value.clone());
        }
        if let Some(body) = data {
            request = request.json(body);
        }

        endpoints::send_request(&self.http, &token, request, self.timeout).await
    }
}
