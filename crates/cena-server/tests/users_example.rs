// SPDX-License-Identifier: Apache-2.0

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cena_server::{load_users, validate_startup_config, ApiConfig, CredentialStore, Role};

#[test]
fn shipped_users_file_is_valid_and_usable() {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../config/users.example.yaml");
    let users = load_users(&path).expect("example users");
    validate_startup_config(&ApiConfig::default(), &users).expect("valid example users");

    let store = CredentialStore::new(&users);
    assert_eq!(store.len(), 4);
    let header = format!("Basic {}", STANDARD.encode("chef:chef-pass"));
    let caller = store.authenticate(Some(&header)).expect("chef authenticates");
    assert!(caller.has_role(Role::IngredientManager));
    assert!(!caller.has_role(Role::Actuator));
}
