//! Bounded concurrent dispatch of materialized programs
//!
//! Every case is submitted as its own task; a semaphore caps how many are
//! in flight. Each outcome carries the case it belongs to, and the whole
//! batch can be withdrawn through a [`CancelHandle`].

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{Semaphore, watch};
use tokio::task::JoinSet;

use crate::error::JudgeError;
use crate::materialize::MaterializedCase;
use crate::sandbox::{SandboxClient, SandboxError, SubmissionHandle, SubmissionRequest};

/// Withdraws a running dispatch
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

/// Observed by dispatch tasks; cloned into each one
#[derive(Debug, Clone)]
pub struct CancelToken {
    receiver: watch::Receiver<bool>,
}

/// A linked handle and token
pub fn cancellation() -> (CancelHandle, CancelToken) {
    let (sender, receiver) = watch::channel(false);
    (CancelHandle { sender }, CancelToken { receiver })
}

impl CancelHandle {
    pub fn cancel(&self) {
        // No receivers left means nothing is running
        let _ = self.sender.send(true);
    }
}

impl CancelToken {
    /// A token that is never cancelled
    pub fn never() -> Self {
        let (_, token) = cancellation();
        token
    }

    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once cancelled; pends forever if the handle was dropped
    pub async fn cancelled(&mut self) {
        loop {
            if *self.receiver.borrow_and_update() {
                return;
            }
            if self.receiver.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

/// Result of one case's submission
#[derive(Debug)]
pub struct DispatchOutcome {
    pub case_no: usize,
    pub case_id: String,
    pub result: Result<SubmissionHandle, JudgeError>,
}

pub struct Dispatcher {
    client: Arc<dyn SandboxClient>,
    max_concurrency: usize,
}

impl Dispatcher {
    pub fn new(client: Arc<dyn SandboxClient>, max_concurrency: usize) -> Self {
        Self {
            client,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Submit every case and wait for all of them. Outcomes come back in
    /// case order whatever order the sandbox answers in.
    pub async fn dispatch(&self, cases: Vec<MaterializedCase>, cancel: CancelToken) -> Vec<DispatchOutcome> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = JoinSet::new();
        info!("dispatching {} cases, at most {} at once", cases.len(), self.max_concurrency);

        // Cases whose task never reported back still get an outcome
        let mut spawned = HashMap::new();
        for case in cases {
            let MaterializedCase {
                case_no,
                case_id,
                language,
                code,
            } = case;
            let request = SubmissionRequest {
                code,
                language: language.id().to_string(),
            };
            let client = Arc::clone(&self.client);
            let semaphore = Arc::clone(&semaphore);
            let mut cancel = cancel.clone();
            let task_case_id = case_id.clone();
            let handle = tasks.spawn(async move {
                let result = tokio::select! {
                    biased;
                    () = cancel.cancelled() => Err(JudgeError::Cancelled { case_no }),
                    result = submit_with_permit(client.as_ref(), &semaphore, &request) => {
                        result.map_err(|source| JudgeError::Dispatch { case_no, source })
                    }
                };
                match &result {
                    Ok(handle) => debug!("case {} accepted with status {}", case_no, handle.status),
                    Err(e) => warn!("{}", e),
                }
                DispatchOutcome {
                    case_no,
                    case_id: task_case_id,
                    result,
                }
            });
            spawned.insert(handle.id(), (case_no, case_id));
        }

        let mut outcomes = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    let Some((case_no, case_id)) = spawned.remove(&e.id()) else {
                        warn!("dispatch task of an unknown case failed: {}", e);
                        continue;
                    };
                    warn!("dispatch task of case {} failed: {}", case_no, e);
                    outcomes.push(DispatchOutcome {
                        case_no,
                        case_id,
                        result: Err(JudgeError::Dispatch {
                            case_no,
                            source: SandboxError::TaskFailed(e.to_string()),
                        }),
                    });
                }
            }
        }
        outcomes.sort_by_key(|outcome| outcome.case_no);
        outcomes
    }
}

async fn submit_with_permit(
    client: &dyn SandboxClient,
    semaphore: &Semaphore,
    request: &SubmissionRequest,
) -> Result<SubmissionHandle, SandboxError> {
    // The semaphore is never closed
    let _permit = semaphore
        .acquire()
        .await
        .map_err(|e| SandboxError::Transport(e.to_string()))?;
    client.submit(request).await
}
