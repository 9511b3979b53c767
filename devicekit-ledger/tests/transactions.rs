//! Integration tests exercising the ledger contract through the trait,
//! the way the registry core consumes it.

use devicekit_ledger::{
    CompositeKey, LedgerError, LedgerResult, LedgerTransaction, MemoryLedger,
};

fn key(state: &str, id: &str) -> CompositeKey {
    CompositeKey::new("device", &[state, id]).unwrap()
}

// Mirrors how the core moves a record between partitions: generic over the
// transaction trait, two writes in one transaction.
fn move_record<L: LedgerTransaction>(
    tx: &mut L,
    from: &CompositeKey,
    to: &CompositeKey,
) -> LedgerResult<bool> {
    let Some(value) = tx.get(from)? else {
        return Ok(false);
    };
    tx.put(to, &value)?;
    tx.delete(from)?;
    Ok(true)
}

#[test]
fn move_between_prefixes_is_atomic() {
    let ledger = MemoryLedger::new();

    let mut tx = ledger.begin().unwrap();
    tx.put(&key("active", "10.0.0.1"), b"record").unwrap();
    tx.commit().unwrap();

    let mut tx = ledger.begin().unwrap();
    assert!(move_record(&mut tx, &key("active", "10.0.0.1"), &key("blocked", "10.0.0.1")).unwrap());

    // Before commit, other transactions still see the old placement.
    let other = ledger.begin().unwrap();
    assert!(other.get(&key("active", "10.0.0.1")).unwrap().is_some());
    assert!(other.get(&key("blocked", "10.0.0.1")).unwrap().is_none());

    tx.commit().unwrap();

    // After commit, exactly the new placement is visible.
    let after = ledger.begin().unwrap();
    assert!(after.get(&key("active", "10.0.0.1")).unwrap().is_none());
    assert!(after.get(&key("blocked", "10.0.0.1")).unwrap().is_some());
}

#[test]
fn abandoned_move_leaves_no_trace() {
    let ledger = MemoryLedger::new();

    let mut tx = ledger.begin().unwrap();
    tx.put(&key("active", "10.0.0.1"), b"record").unwrap();
    tx.commit().unwrap();

    let mut tx = ledger.begin().unwrap();
    assert!(move_record(&mut tx, &key("active", "10.0.0.1"), &key("blocked", "10.0.0.1")).unwrap());
    drop(tx);

    let after = ledger.begin().unwrap();
    assert!(after.get(&key("active", "10.0.0.1")).unwrap().is_some());
    assert!(after.get(&key("blocked", "10.0.0.1")).unwrap().is_none());
}

#[test]
fn concurrent_moves_of_same_record_conflict() {
    let ledger = MemoryLedger::new();

    let mut tx = ledger.begin().unwrap();
    tx.put(&key("active", "10.0.0.1"), b"record").unwrap();
    tx.commit().unwrap();

    let mut first = ledger.begin().unwrap();
    let mut second = ledger.begin().unwrap();
    assert!(
        move_record(&mut first, &key("active", "10.0.0.1"), &key("blocked", "10.0.0.1")).unwrap()
    );
    assert!(
        move_record(&mut second, &key("active", "10.0.0.1"), &key("blocked", "10.0.0.1")).unwrap()
    );

    first.commit().unwrap();
    assert!(matches!(second.commit(), Err(LedgerError::Conflict)));
}

#[test]
fn scan_can_be_abandoned_mid_iteration() {
    let ledger = MemoryLedger::new();

    let mut tx = ledger.begin().unwrap();
    for i in 1..=5 {
        tx.put(&key("active", &format!("192.168.0.{i}")), b"record")
            .unwrap();
    }

    // Early exit from iteration; the cursor is dropped, and the
    // transaction stays usable.
    {
        let mut scan = tx.scan_prefix("device", &["active"]).unwrap();
        let first = scan.next().unwrap().unwrap();
        assert_eq!(format!("{}", first.0), "device/active/192.168.0.1");
    }

    assert!(tx.get(&key("active", "192.168.0.5")).unwrap().is_some());
    tx.commit().unwrap();
}

#[test]
fn scan_of_empty_prefix_yields_nothing() {
    let ledger = MemoryLedger::new();
    let tx = ledger.begin().unwrap();
    assert_eq!(tx.scan_prefix("device", &["deleted"]).unwrap().count(), 0);
}
