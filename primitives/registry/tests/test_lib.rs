use std::sync::Arc;
use std::thread;

use registry::{ServiceRegistry, ServiceRegistryReader};
use types::{MethodDeclaration, Role, ServiceDeclaration, ServiceDeclarations};

/// Helper function to create a service declaration with a single method
fn create_test_service(interface: &str) -> ServiceDeclaration {
    ServiceDeclaration {
        interface: interface.to_string(),
        methods: vec![MethodDeclaration::named("Ping")],
        ..ServiceDeclaration::default()
    }
}

/// Helper function to build a service table from identifiers
fn services(ids: &[&str]) -> ServiceDeclarations {
    ids.iter()
        .map(|id| (id.to_string(), create_test_service(&format!("com.example.{}", id))))
        .collect()
}

#[test]
fn test_service_registry_new() {
    let registry = ServiceRegistry::new();

    for role in Role::ALL {
        assert_eq!(registry.service_count(role), 0);
        assert!(registry.list_services(role).is_empty());
        assert!(registry.lookup(role, "nonexistent").is_none());
    }
}

#[test]
fn test_service_registry_install_and_lookup() {
    let registry = ServiceRegistry::new();
    registry.install(Role::Consumer, services(&["UserProvider", "OrderProvider"]));

    assert_eq!(registry.service_count(Role::Consumer), 2);
    assert_eq!(registry.list_services(Role::Consumer), vec!["OrderProvider", "UserProvider"]);

    let user = registry.consumer_service("UserProvider").expect("consumer service installed");
    assert_eq!(user.interface, "com.example.UserProvider");
    assert_eq!(user.methods[0].name, "Ping");

    // Roles are independent
    assert!(registry.provider_service("UserProvider").is_none());
    assert!(registry.provider_services().is_empty());
}

#[test]
fn test_service_registry_install_replaces_wholesale() {
    let registry = ServiceRegistry::new();
    registry.install(Role::Provider, services(&["A", "B"]));
    registry.install(Role::Consumer, services(&["C"]));

    registry.install(Role::Provider, services(&["B", "D"]));

    assert!(registry.provider_service("A").is_none());
    assert!(registry.provider_service("B").is_some());
    assert!(registry.provider_service("D").is_some());
    assert_eq!(registry.provider_services().len(), 2);

    // The other role is untouched
    assert!(registry.consumer_service("C").is_some());
    assert_eq!(registry.consumer_services().len(), 1);
}

#[test]
fn test_snapshot_outlives_install() {
    let registry = ServiceRegistry::new();
    registry.install(Role::Provider, services(&["Old"]));

    let before = registry.snapshot(Role::Provider);
    registry.install(Role::Provider, services(&["New"]));

    assert!(before.contains_key("Old"));
    assert!(!before.contains_key("New"));
    assert!(registry.provider_service("New").is_some());
}

#[test]
fn test_readers_never_observe_partial_install() {
    let registry = Arc::new(ServiceRegistry::new());
    let small = ["S1", "S2"];
    let large = ["L1", "L2", "L3", "L4", "L5", "L6"];
    registry.install(Role::Consumer, services(&small));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..500 {
                    let snapshot = registry.consumer_services();
                    let keys: Vec<&str> = snapshot.keys().map(String::as_str).collect();
                    let mut expected_small = small.to_vec();
                    expected_small.sort();
                    let mut expected_large = large.to_vec();
                    expected_large.sort();
                    assert!(keys == expected_small || keys == expected_large, "mixed: {:?}", keys);
                }
            })
        })
        .collect();

    for i in 0..200 {
        if i % 2 == 0 {
            registry.install(Role::Consumer, services(&large));
        } else {
            registry.install(Role::Consumer, services(&small));
        }
    }

    for reader in readers {
        reader.join().expect("reader thread panicked");
    }
}
