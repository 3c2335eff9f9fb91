use keysafe_model::{Keyring, Snapshot};
use tracing::warn;

use crate::error::SelectorError;
use crate::selectors::{get_selected_address, get_selected_identity};

/// Keyring type of identities created in the vault itself. Any other type
/// holds keys imported from elsewhere.
pub const PRIMARY_KEYRING_TYPE: &str = "sovrin";

pub fn is_imported(keyring: &Keyring) -> bool {
    keyring.kind != PRIMARY_KEYRING_TYPE
}

/// The single keyring governing the selected address (or the selected
/// identity's address, when that differs).
///
/// An address no keyring claims, or one claimed by several keyrings, is a
/// broken snapshot and is reported rather than guessed around.
pub fn find_owning_keyring(snapshot: &Snapshot) -> Result<&Keyring, SelectorError> {
    let identity_address =
        get_selected_identity(snapshot)?.and_then(|identity| identity.address.as_ref());
    let address = get_selected_address(snapshot).ok_or(SelectorError::NoAccounts)?;

    let mut owners = snapshot.metamask.keyrings.iter().filter(|keyring| {
        keyring.governs(address) || identity_address.is_some_and(|other| keyring.governs(other))
    });
    let owner = owners.next().ok_or_else(|| SelectorError::NoOwningKeyring {
        address: address.clone(),
    })?;
    let others = owners.count();
    if others > 0 {
        warn!(keyrings = others + 1, "selected address claimed by multiple keyrings");
        return Err(SelectorError::AmbiguousKeyring {
            address: address.clone(),
            count: others + 1,
        });
    }
    Ok(owner)
}
