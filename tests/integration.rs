//! Integration tests for the resume registry contract.

#![cfg(feature = "testutils")]

use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Bytes, Env, Error, String,
};
use soroban_resume_registry::{
    RegistryConfig, RegistryError, ResumeRegistryContract, ResumeRegistryContractClient,
    UsernamePolicy,
};

fn setup() -> (Env, ResumeRegistryContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(ResumeRegistryContract, ());
    let client = ResumeRegistryContractClient::new(&env, &contract_id);
    let owner = Address::generate(&env);

    client.init(&owner);

    (env, client, owner)
}

fn s(env: &Env, value: &str) -> String {
    String::from_str(env, value)
}

#[test]
fn test_full_resume_lifecycle() {
    let (env, client, owner) = setup();
    let user = Address::generate(&env);
    let username = Bytes::from_slice(&env, b"JDoe");

    client.add_to_whitelist(&user, &owner);
    client.create_or_update_profile(
        &s(&env, "John"),
        &username,
        &s(&env, "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg"),
        &s(&env, "john_doe@gmail.com"),
        &s(&env, "Boston, MA"),
        &s(&env, "Full Stack Developer"),
        &user,
    );
    assert_eq!(client.get_total_users(), 1);

    client.create_user_social(
        &s(&env, "https://johndoe.dev"),
        &s(&env, "https://twitter.com/johndoe"),
        &s(&env, ""),
        &s(&env, "https://github.com/johndoe"),
        &s(&env, ""),
        &s(&env, "https://linkedin.com/in/johndoe"),
        &s(&env, ""),
        &s(&env, ""),
        &user,
    );
    client.create_user_introduction(&s(&env, "This is Blockvitae"), &user);
    client.create_user_skill(
        &vec![
            &env,
            s(&env, "Php"),
            s(&env, "ETH Smart Contracts"),
            s(&env, "Truffle"),
        ],
        &user,
    );

    let first = client.create_project(
        &s(&env, "Discover"),
        &s(&env, "Travellers meet locals"),
        &s(&env, "A web application to connect tourists with locals for city tours"),
        &s(&env, "https://discoverapp.com"),
        &true,
        &user,
    );
    let second = client.create_project(
        &s(&env, "Blockvitae"),
        &s(&env, "World's first blockchain resume"),
        &s(&env, "A blockchain based curriculum vitae"),
        &s(&env, "https://blockvitae.com"),
        &false,
        &user,
    );
    assert_eq!((first, second), (0, 1));
    assert!(!env.events().all().is_empty());

    client.delete_project(&second, &user);

    let projects = client.list_projects(&user, &0, &10);
    assert_eq!(projects.len(), 2);
    assert!(projects.iter().all(|p| p.deleted));

    // Resolve the whole resume from the username alone
    let address = client.get_address_for_username(&username).unwrap();
    assert_eq!(address, user);
    assert_eq!(client.get_profile(&address).full_name, s(&env, "John"));
    assert_eq!(
        client.get_user_social(&address).github,
        s(&env, "https://github.com/johndoe")
    );
    assert_eq!(
        client.get_user_introduction(&address),
        s(&env, "This is Blockvitae")
    );
    assert_eq!(client.get_user_skills(&address).len(), 3);
}

#[test]
fn test_work_experience_scenario() {
    let (env, client, owner) = setup();
    let user = Address::generate(&env);

    client.add_to_whitelist(&user, &owner);
    client.create_or_update_profile(
        &s(&env, "John"),
        &Bytes::from_slice(&env, b"JDoe"),
        &s(&env, ""),
        &s(&env, ""),
        &s(&env, ""),
        &s(&env, ""),
        &user,
    );

    for (company, is_working) in [("Statusbrew", false), ("Web Bakerz", true)] {
        client.create_work_experience(
            &s(&env, company),
            &s(&env, "Engineer"),
            &s(&env, "2016-12-20"),
            &s(&env, ""),
            &s(&env, ""),
            &is_working,
            &false,
            &user,
        );
    }

    client.delete_work_experience(&1, &user);

    assert_eq!(client.get_work_experience_count(&user), 2);
    assert!(!client.get_work_experience(&user, &0).deleted);
    assert!(client.get_work_experience(&user, &1).deleted);
    assert_eq!(
        client.try_delete_work_experience(&2, &user),
        Err(Ok(Error::from(RegistryError::IndexOutOfRange)))
    );
}

#[test]
fn test_publications_lifecycle() {
    let (env, client, _owner) = setup();
    let user = Address::generate(&env);

    for title in ["Soft deletes", "Stable indices"] {
        client.create_publication(
            &s(&env, title),
            &s(&env, "https://example.org"),
            &s(&env, ""),
            &false,
            &user,
        );
    }
    client.delete_publication(&0, &user);

    let page = client.list_publications(&user, &0, &2);
    assert!(page.get(0).unwrap().deleted);
    assert!(!page.get(1).unwrap().deleted);
    assert_eq!(client.get_publication_count(&user), 2);
}

#[test]
fn test_owner_handover() {
    let (env, client, owner) = setup();
    let successor = Address::generate(&env);
    let user = Address::generate(&env);

    client.set_owner(&successor, &owner);

    assert_eq!(
        client.try_add_to_whitelist(&user, &owner),
        Err(Ok(Error::from(RegistryError::NotAuthorized)))
    );
    client.add_to_whitelist(&user, &successor);

    client.set_config(
        &RegistryConfig {
            username_policy: UsernamePolicy::Release,
            strict_reads: false,
        },
        &successor,
    );
    assert_eq!(client.config().username_policy, UsernamePolicy::Release);
}

#[test]
fn test_username_release_policy() {
    let (env, client, owner) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let old_name = Bytes::from_slice(&env, b"JDoe");
    let new_name = Bytes::from_slice(&env, b"JDoe001");

    client.set_config(
        &RegistryConfig {
            username_policy: UsernamePolicy::Release,
            strict_reads: false,
        },
        &owner,
    );

    client.add_to_whitelist(&alice, &owner);
    client.add_to_whitelist(&bob, &owner);

    for (who, username) in [(&alice, &old_name), (&alice, &new_name), (&bob, &old_name)] {
        client.create_or_update_profile(
            &s(&env, "Someone"),
            username,
            &s(&env, ""),
            &s(&env, ""),
            &s(&env, ""),
            &s(&env, ""),
            who,
        );
    }

    assert_eq!(client.get_address_for_username(&new_name), Some(alice));
    assert_eq!(client.get_address_for_username(&old_name), Some(bob));
    assert!(!client.is_username_available(&old_name));
    assert!(client.is_username_available(&Bytes::from_slice(&env, b"JDoe002")));
    assert_eq!(client.get_total_users(), 2);
}
