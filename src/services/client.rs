use chrono::NaiveDateTime;
use validator::Validate;

use crate::domain::client::{Client, ClientUpdate};
use crate::domain::types::{ClientId, NoteId};
use crate::dto::client::ClientPageData;
use crate::format::{format_ratio, time_since_last_contact};
use crate::forms::client::{AddCommunicationForm, AddNoteForm};
use crate::forms::main::AddClientForm;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

const RECENT_COMMUNICATIONS: usize = 5;

/// Fetches a client that must exist for a mutation to proceed.
fn fetch_client<R>(repo: &R, client_id: &str) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    let id = parse_client_id(client_id)?;
    repo.get_client_by_id(&id)?.ok_or(ServiceError::NotFound)
}

/// Loads everything the client detail view shows. `None` for unknown ids.
pub fn load_client_page<R>(
    repo: &R,
    client_id: &str,
    now: NaiveDateTime,
) -> ServiceResult<Option<ClientPageData>>
where
    R: ClientReader + ?Sized,
{
    let Ok(id) = ClientId::new(client_id) else {
        return Ok(None);
    };

    let client = match repo.get_client_by_id(&id) {
        Ok(Some(client)) => client,
        Ok(None) => return Ok(None),
        Err(err) => {
            log::error!("Failed to get client {id}: {err}");
            return Err(err.into());
        }
    };

    let ratio = client
        .financial_data
        .as_ref()
        .and_then(|data| data.debt_to_asset_ratio);

    Ok(Some(ClientPageData {
        notes: client.notes_newest_first(),
        recent_communications: client.recent_communications(RECENT_COMMUNICATIONS),
        profile_completion: client.profile_completion(),
        last_contact: time_since_last_contact(client.last_contacted_at, now),
        debt_to_asset_ratio: format_ratio(ratio),
        client,
    }))
}

fn parse_client_id(client_id: &str) -> ServiceResult<ClientId> {
    ClientId::new(client_id).map_err(|_| ServiceError::NotFound)
}

/// Appends a note. Blank content leaves the client as it was.
pub fn add_note<R>(repo: &R, client_id: &str, form: AddNoteForm) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate note form: {err}");
        return Err(ServiceError::Form("Note author is required".to_string()));
    }

    if form.content.trim().is_empty() {
        log::debug!("Ignoring blank note for client {client_id}");
        return fetch_client(repo, client_id);
    }

    let id = parse_client_id(client_id)?;
    let update = ClientUpdate::AddNote {
        content: form.content,
        author: form.author,
    };
    let saved = repo.update_client(&id, &update).map_err(|err| {
        log::error!("Failed to save note for client {id}: {err}");
        err
    })?;
    log::info!("Added note to client {}", saved.id);
    Ok(saved)
}

/// Removes a note. Unknown note ids are not an error.
pub fn delete_note<R>(repo: &R, client_id: &str, note_id: &str) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let Ok(note_id) = NoteId::new(note_id) else {
        return fetch_client(repo, client_id);
    };

    let id = parse_client_id(client_id)?;
    let saved = repo
        .update_client(&id, &ClientUpdate::DeleteNote(note_id.clone()))
        .map_err(|err| {
            log::error!("Failed to delete note {note_id}: {err}");
            err
        })?;
    log::info!("Deleted note {note_id} from client {}", saved.id);
    Ok(saved)
}

/// Logs an interaction and bumps the client's last-contacted date.
pub fn log_communication<R>(
    repo: &R,
    client_id: &str,
    form: AddCommunicationForm,
) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let payload = form.to_new_communication().map_err(|err| {
        log::error!("Failed to validate communication form: {err}");
        ServiceError::from(err)
    })?;

    let id = parse_client_id(client_id)?;
    let saved = repo
        .update_client(&id, &ClientUpdate::AddCommunication(payload))
        .map_err(|err| {
            log::error!("Failed to log communication for client {id}: {err}");
            err
        })?;
    log::info!("Logged communication for client {}", saved.id);
    Ok(saved)
}

/// Validates the add-client form and stores a new client record.
pub fn create_client<R>(repo: &R, form: AddClientForm) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let new_client = form.to_new_client().map_err(|err| {
        log::error!("Failed to validate client form: {err}");
        ServiceError::from(err)
    })?;

    let client = repo.create_client(&new_client).map_err(|err| {
        log::error!("Failed to add a client: {err}");
        err
    })?;
    log::info!("Created client {}", client.id);
    Ok(client)
}
