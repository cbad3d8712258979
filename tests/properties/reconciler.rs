use dockcraft::domain::ports::AssumeYes;
use dockcraft::domain::services::{EntityReconciler, ReconcileOutcome};
use dockcraft::ComposeDocument;
use proptest::prelude::*;

use crate::support::{document, service_name, FixedPrompter};

fn applied(outcome: ReconcileOutcome) -> ComposeDocument {
    match outcome {
        ReconcileOutcome::Applied { doc, .. } => doc,
        ReconcileOutcome::Declined { .. } => panic!("AssumeYes never declines"),
    }
}

proptest! {
    #[test]
    fn remove_drops_exactly_one_entity(doc in document(8), pick in any::<prop::sample::Index>()) {
        let names = doc.service_names();
        let target = names[pick.index(names.len())].clone();
        let prompter = FixedPrompter::new();
        let reconciler = EntityReconciler::new(&prompter, &AssumeYes);

        let after = applied(reconciler.remove(doc.clone(), Some(&target)).unwrap());

        prop_assert_eq!(after.len(), names.len() - 1);
        prop_assert!(!after.contains(&target));
        prop_assert!(after.envs().iter().all(|e| e.container_name != target));
        prop_assert!(after.service_files().iter().all(|f| f.name != target));
        let expected: Vec<_> = names.into_iter().filter(|n| *n != target).collect();
        prop_assert_eq!(after.service_names(), expected);
        prop_assert!(after.validate().is_ok());
    }

    #[test]
    fn add_then_remove_restores_document(doc in document(6), name in service_name()) {
        prop_assume!(!doc.contains(&name));
        let prompter = FixedPrompter::new();
        let reconciler = EntityReconciler::new(&prompter, &AssumeYes);

        let added = applied(reconciler.add(doc.clone(), Some(&name)).unwrap());
        prop_assert_eq!(added.len(), doc.len() + 1);
        let added_names = added.service_names();
        prop_assert_eq!(added_names.last(), Some(&name));

        let restored = applied(reconciler.remove(added, Some(&name)).unwrap());
        prop_assert_eq!(restored, doc);
    }

    #[test]
    fn change_keeps_key_and_position(doc in document(6), pick in any::<prop::sample::Index>()) {
        let names = doc.service_names();
        let target = names[pick.index(names.len())].clone();
        let prompter = FixedPrompter::naming("renamed-by-payload");
        let reconciler = EntityReconciler::new(&prompter, &AssumeYes);

        let after = applied(reconciler.change(doc, Some(&target)).unwrap());

        prop_assert_eq!(after.service_names(), names);
        let entity = after.entity(&target).unwrap();
        prop_assert!(entity.is_consistent());
        prop_assert_eq!(entity.files.server.version.as_str(), "1.21");
        prop_assert!(!after.contains("renamed-by-payload"));
    }
}
