//! Bulk operation executor: turns a parsed CSV file into a sequence of
//! remote mutations with per-row results and incremental progress.
//!
//! Rows are settled strictly in CSV order, one at a time; a row's
//! notification side effect resolves before the next row starts. Row
//! failures never halt the batch, and there is no rollback: rows that
//! already succeeded stay mutated on the remote system.

use async_trait::async_trait;
use chrono::Utc;
use contracts::system::auth::AuthSession;
use contracts::usecases::u501_bulk_geotab::{
    BatchError, BatchProgress, BatchSummary, NotificationRequest, OperationMode, OperationResult,
    COL_GEOTAB_SERIAL, COL_MAC_ADDRESS,
};
use log::{info, warn};

use crate::shared::csv_importer::CsvTable;

/// Remote side effects required by the executor.
///
/// The production implementation is `HttpGeotabClient`; tests substitute
/// a recording mock. Futures are not required to be `Send` because the
/// executor runs on the browser's single-threaded task queue.
#[async_trait(?Send)]
pub trait GeotabClient {
    async fn pair(&self, mac_address: &str, serial: &str) -> Result<(), String>;
    async fn unpair(&self, mac_address: &str) -> Result<(), String>;
    async fn notify(&self, request: &NotificationRequest) -> Result<(), String>;
}

/// Run one batch: validate the table, then settle rows in order.
///
/// `on_row` receives a fresh snapshot after every settled row, so an
/// observer always sees `results.len() == progress.current`. Batch-level
/// validation happens before any remote call; a `BatchError` means zero
/// rows were processed.
pub async fn run_bulk_operation<C, F>(
    client: &C,
    table: &CsvTable,
    mode: OperationMode,
    session: &AuthSession,
    mut on_row: F,
) -> Result<BatchSummary, BatchError>
where
    C: GeotabClient,
    F: FnMut(BatchProgress, &[OperationResult]),
{
    if !session.has_token() {
        return Err(BatchError::MissingToken);
    }

    if table.headers.is_empty() {
        return Err(BatchError::EmptyFile);
    }

    for col in mode.required_columns() {
        if !table.has_column(col) {
            return Err(BatchError::MissingColumn(col));
        }
    }

    let started_at = Utc::now();
    let total = table.row_count();
    let mut results: Vec<OperationResult> = Vec::with_capacity(total);

    info!(
        "bulk {}: {} rows from {}",
        mode.as_str(),
        total,
        table.file_name
    );

    for row in &table.rows {
        let mac_address = row.get(COL_MAC_ADDRESS).cloned().unwrap_or_default();
        let serial = row.get(COL_GEOTAB_SERIAL).cloned();

        let result = match settle_row(client, mode, session, &mac_address, serial.as_deref()).await
        {
            Ok(()) => OperationResult::ok(&mac_address),
            Err(e) => {
                warn!("bulk {}: {} failed: {}", mode.as_str(), mac_address, e);
                OperationResult::failed(&mac_address, e)
            }
        };
        results.push(result);

        on_row(
            BatchProgress {
                current: results.len(),
                total,
            },
            &results,
        );
    }

    let summary = BatchSummary::from_results(&results, started_at, Utc::now());
    info!(
        "bulk {}: finished, {} ok / {} failed",
        mode.as_str(),
        summary.succeeded,
        summary.failed
    );
    Ok(summary)
}

/// One row, fully settled: the mutation, then (on success, when the
/// session carries a username) the notification. A failed notification
/// reports the row as failed even though the mutation itself already
/// stuck server-side.
async fn settle_row<C: GeotabClient>(
    client: &C,
    mode: OperationMode,
    session: &AuthSession,
    mac_address: &str,
    serial: Option<&str>,
) -> Result<(), String> {
    match mode {
        OperationMode::Pair => {
            client
                .pair(mac_address, serial.unwrap_or_default())
                .await?
        }
        OperationMode::Unpair => client.unpair(mac_address).await?,
    }

    if let Some(username) = session.username.as_deref() {
        let request = NotificationRequest {
            email: username.to_string(),
            mac_address: mac_address.to_string(),
            geotab_serial_number: match mode {
                OperationMode::Pair => serial.map(|s| s.to_string()),
                OperationMode::Unpair => None,
            },
            operation: mode,
        };
        if let Err(e) = client.notify(&request).await {
            info!(
                "bulk {}: {} mutated but notification failed",
                mode.as_str(),
                mac_address
            );
            return Err(e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::csv_importer::parser::parse_rows;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Pair { mac: String, serial: String },
        Unpair { mac: String },
        Notify { email: String, mac: String },
    }

    #[derive(Default)]
    struct MockClient {
        calls: RefCell<Vec<Call>>,
        fail_pair: HashMap<String, String>,
        fail_unpair: HashMap<String, String>,
        fail_notify: HashMap<String, String>,
    }

    impl MockClient {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn mutation_calls(&self) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|c| !matches!(c, Call::Notify { .. }))
                .count()
        }
    }

    #[async_trait(?Send)]
    impl GeotabClient for MockClient {
        async fn pair(&self, mac_address: &str, serial: &str) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::Pair {
                mac: mac_address.to_string(),
                serial: serial.to_string(),
            });
            match self.fail_pair.get(mac_address) {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        async fn unpair(&self, mac_address: &str) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::Unpair {
                mac: mac_address.to_string(),
            });
            match self.fail_unpair.get(mac_address) {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        async fn notify(&self, request: &NotificationRequest) -> Result<(), String> {
            self.calls.borrow_mut().push(Call::Notify {
                email: request.email.clone(),
                mac: request.mac_address.clone(),
            });
            match self.fail_notify.get(&request.mac_address) {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn table(text: &str) -> CsvTable {
        CsvTable::from_raw(parse_rows(text), "test.csv".to_string()).unwrap()
    }

    fn session() -> AuthSession {
        AuthSession {
            token: "tok-123".to_string(),
            username: Some("ops@example.com".to_string()),
        }
    }

    fn session_without_username() -> AuthSession {
        AuthSession {
            token: "tok-123".to_string(),
            username: None,
        }
    }

    const PAIR_CSV: &str =
        "macAddress,geotabSerialNumber\nAA:BB:CC:DD:EE:01,GT1\nAA:BB:CC:DD:EE:02,GT2";

    #[test]
    fn pair_batch_settles_rows_in_input_order() {
        let client = MockClient::default();
        let summary = block_on(run_bulk_operation(
            &client,
            &table(PAIR_CSV),
            OperationMode::Pair,
            &session(),
            |_, _| {},
        ))
        .unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(
            client.calls(),
            vec![
                Call::Pair {
                    mac: "AA:BB:CC:DD:EE:01".to_string(),
                    serial: "GT1".to_string()
                },
                Call::Notify {
                    email: "ops@example.com".to_string(),
                    mac: "AA:BB:CC:DD:EE:01".to_string()
                },
                Call::Pair {
                    mac: "AA:BB:CC:DD:EE:02".to_string(),
                    serial: "GT2".to_string()
                },
                Call::Notify {
                    email: "ops@example.com".to_string(),
                    mac: "AA:BB:CC:DD:EE:02".to_string()
                },
            ]
        );
    }

    #[test]
    fn unpair_batch_uses_the_delete_operation() {
        let client = MockClient::default();
        let summary = block_on(run_bulk_operation(
            &client,
            &table("macAddress\nAA:BB:CC:DD:EE:01"),
            OperationMode::Unpair,
            &session_without_username(),
            |_, _| {},
        ))
        .unwrap();

        assert_eq!(summary.total, 1);
        assert_eq!(
            client.calls(),
            vec![Call::Unpair {
                mac: "AA:BB:CC:DD:EE:01".to_string()
            }]
        );
    }

    #[test]
    fn pair_without_serial_column_rejects_before_any_call() {
        let client = MockClient::default();
        let err = block_on(run_bulk_operation(
            &client,
            &table("macAddress\nAA:BB:CC:DD:EE:01"),
            OperationMode::Pair,
            &session(),
            |_, _| panic!("no progress expected"),
        ))
        .unwrap_err();

        assert_eq!(err, BatchError::MissingColumn(COL_GEOTAB_SERIAL));
        assert!(client.calls().is_empty());
    }

    #[test]
    fn missing_mac_column_rejects_both_modes() {
        for mode in [OperationMode::Pair, OperationMode::Unpair] {
            let client = MockClient::default();
            let err = block_on(run_bulk_operation(
                &client,
                &table("geotabSerialNumber\nGT1"),
                mode,
                &session(),
                |_, _| panic!("no progress expected"),
            ))
            .unwrap_err();

            assert_eq!(err, BatchError::MissingColumn(COL_MAC_ADDRESS));
            assert!(client.calls().is_empty());
        }
    }

    #[test]
    fn missing_token_never_starts_the_run() {
        let client = MockClient::default();
        let err = block_on(run_bulk_operation(
            &client,
            &table(PAIR_CSV),
            OperationMode::Pair,
            &AuthSession::default(),
            |_, _| panic!("no progress expected"),
        ))
        .unwrap_err();

        assert_eq!(err, BatchError::MissingToken);
        assert!(client.calls().is_empty());
    }

    #[test]
    fn remote_404_fails_the_row_without_halting_the_batch() {
        let client = MockClient {
            fail_pair: HashMap::from([(
                "AA:BB:CC:DD:EE:01".to_string(),
                "HTTP 404 Not Found".to_string(),
            )]),
            ..Default::default()
        };

        let mut observed: Vec<OperationResult> = Vec::new();
        let summary = block_on(run_bulk_operation(
            &client,
            &table(PAIR_CSV),
            OperationMode::Pair,
            &session(),
            |_, snapshot| observed = snapshot.to_vec(),
        ))
        .unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.succeeded, 1);

        assert!(!observed[0].success);
        assert!(observed[0].error.as_deref().unwrap().contains("404"));
        assert!(observed[1].success);

        // The failed row must not suppress the second mutation.
        assert_eq!(client.mutation_calls(), 2);
    }

    #[test]
    fn notification_failure_overrides_an_otherwise_successful_row() {
        let client = MockClient {
            fail_notify: HashMap::from([(
                "AA:BB:CC:DD:EE:01".to_string(),
                "notification service unavailable".to_string(),
            )]),
            ..Default::default()
        };

        let mut observed: Vec<OperationResult> = Vec::new();
        let summary = block_on(run_bulk_operation(
            &client,
            &table("macAddress,geotabSerialNumber\nAA:BB:CC:DD:EE:01,GT1"),
            OperationMode::Pair,
            &session(),
            |_, snapshot| observed = snapshot.to_vec(),
        ))
        .unwrap();

        // The pairing call itself was made and is not rolled back.
        assert_eq!(
            client.calls()[0],
            Call::Pair {
                mac: "AA:BB:CC:DD:EE:01".to_string(),
                serial: "GT1".to_string()
            }
        );
        assert_eq!(summary.failed, 1);
        assert!(!observed[0].success);
        assert_eq!(
            observed[0].error.as_deref(),
            Some("notification service unavailable")
        );
    }

    #[test]
    fn no_username_means_no_notification_calls() {
        let client = MockClient::default();
        let summary = block_on(run_bulk_operation(
            &client,
            &table(PAIR_CSV),
            OperationMode::Pair,
            &session_without_username(),
            |_, _| {},
        ))
        .unwrap();

        assert_eq!(summary.succeeded, 2);
        assert!(client
            .calls()
            .iter()
            .all(|c| !matches!(c, Call::Notify { .. })));
    }

    #[test]
    fn progress_snapshots_are_monotone_and_consistent() {
        let client = MockClient {
            fail_pair: HashMap::from([(
                "AA:BB:CC:DD:EE:02".to_string(),
                "HTTP 500 Internal Server Error".to_string(),
            )]),
            ..Default::default()
        };

        let csv = "macAddress,geotabSerialNumber\n\
                   AA:BB:CC:DD:EE:01,GT1\n\
                   AA:BB:CC:DD:EE:02,GT2\n\
                   AA:BB:CC:DD:EE:03,GT3";

        let mut snapshots: Vec<(BatchProgress, usize)> = Vec::new();
        let summary = block_on(run_bulk_operation(
            &client,
            &table(csv),
            OperationMode::Pair,
            &session(),
            |progress, snapshot| snapshots.push((progress, snapshot.len())),
        ))
        .unwrap();

        assert_eq!(snapshots.len(), 3);
        let mut previous = 0;
        for (progress, len) in &snapshots {
            // Observers must see len(results) == progress.current.
            assert_eq!(progress.current, *len);
            assert!(progress.current >= previous);
            assert!(progress.current <= progress.total);
            previous = progress.current;
        }
        assert_eq!(snapshots.last().unwrap().0.current, 3);
        assert_eq!(summary.succeeded + summary.failed, summary.total);
    }

    #[test]
    fn header_only_file_completes_with_empty_results() {
        let client = MockClient::default();
        let summary = block_on(run_bulk_operation(
            &client,
            &table("macAddress,geotabSerialNumber"),
            OperationMode::Pair,
            &session(),
            |_, _| panic!("no rows, no snapshots"),
        ))
        .unwrap();

        assert_eq!(summary.total, 0);
        assert!(client.calls().is_empty());
    }
}
