//! Admin endpoints: users and support tickets

use reqwest::Method;
use tracing::error;
use wee_core::models::{
    MessageResponse, SupportTicket, TicketList, TicketStatus, UpdateTicketRequest, User,
};

use super::error::ClientError;
use super::session::SessionClient;

impl SessionClient {
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let request = self.request(Method::GET, "/usuarios");
        self.execute(request)
            .await
            .inspect_err(|e| error!("Failed to list users: {e}"))
    }

    pub async fn delete_user(&self, id: i64) -> Result<MessageResponse, ClientError> {
        let request = self.request(Method::DELETE, &format!("/usuarios/{id}"));
        self.execute_message(request)
            .await
            .inspect_err(|e| error!("Failed to delete user {id}: {e}"))
    }

    pub async fn list_tickets(&self) -> Result<Vec<SupportTicket>, ClientError> {
        let request = self.request(Method::GET, "/admin/support");
        let list: TicketList = self
            .execute(request)
            .await
            .inspect_err(|e| error!("Failed to list support tickets: {e}"))?;
        Ok(list.tickets)
    }

    pub async fn update_ticket_status(
        &self,
        id: i64,
        status: TicketStatus,
    ) -> Result<MessageResponse, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/admin/support/{id}"))
            .json(&UpdateTicketRequest { status });
        self.execute_message(request)
            .await
            .inspect_err(|e| error!("Failed to update ticket {id}: {e}"))
    }
}
