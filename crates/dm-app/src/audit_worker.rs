//! Background engineering audit.
//!
//! The audit is slow and may back off for seconds, so it runs on its own
//! thread. Callers already hold the results when the worker starts.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread::{self, JoinHandle};

use dm_advisor::{
    CollaboratorReply, DocumentExtractor, NarrativeProvider, RetryPolicy, Sleeper, ThreadSleeper,
    audit, extract_reference_text,
};
use dm_engine::{CalculationResults, MixingInputs};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// What the audit should look at.
pub struct AuditJob {
    pub inputs: MixingInputs,
    pub results: CalculationResults,
    pub policy: RetryPolicy,
    /// Document to mine for reference coefficients before auditing
    pub reference: Option<(Arc<dyn DocumentExtractor>, Vec<u8>)>,
}

impl AuditJob {
    pub fn new(inputs: MixingInputs, results: CalculationResults) -> Self {
        Self {
            inputs,
            results,
            policy: RetryPolicy::default(),
            reference: None,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_reference(mut self, extractor: Arc<dyn DocumentExtractor>, document: Vec<u8>) -> Self {
        self.reference = Some((extractor, document));
        self
    }
}

#[derive(Debug, Clone)]
pub enum AuditMessage {
    /// Reference text pulled from the supplied document
    Extracted { reply: CollaboratorReply },
    /// The audit narrative, or its fallback. Always the last message.
    Complete { reply: CollaboratorReply },
}

pub struct AuditWorker {
    pub reply_rx: Receiver<AuditMessage>,
    _handle: JoinHandle<()>,
}

impl AuditWorker {
    /// Audit with the default retry policy, sleeping on the worker thread.
    pub fn start(
        provider: Arc<dyn NarrativeProvider>,
        inputs: MixingInputs,
        results: CalculationResults,
    ) -> Self {
        Self::start_with(provider, AuditJob::new(inputs, results), ThreadSleeper)
    }

    pub fn start_with<S>(provider: Arc<dyn NarrativeProvider>, job: AuditJob, sleeper: S) -> Self
    where
        S: Sleeper + Send + 'static,
    {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let mut sleeper = sleeper;
            // A dropped receiver just means nobody is waiting any more.
            let _ = Self::run_audit(provider.as_ref(), job, &mut sleeper, &tx);
        });

        Self {
            reply_rx: rx,
            _handle: handle,
        }
    }

    fn run_audit<S: Sleeper>(
        provider: &dyn NarrativeProvider,
        job: AuditJob,
        sleeper: &mut S,
        tx: &Sender<AuditMessage>,
    ) -> Result<(), std::sync::mpsc::SendError<AuditMessage>> {
        let mut reference_text = None;
        if let Some((extractor, document)) = &job.reference {
            let reply = extract_reference_text(extractor.as_ref(), &job.policy, sleeper, document);
            if !reply.is_fallback {
                reference_text = Some(reply.text.clone());
            }
            tx.send(AuditMessage::Extracted { reply })?;
        }

        debug!(with_reference = reference_text.is_some(), "audit started");
        let reply = audit(
            provider,
            &job.policy,
            sleeper,
            &job.inputs,
            &job.results,
            reference_text.as_deref(),
        );
        tx.send(AuditMessage::Complete { reply })
    }

    /// Next message if one is ready. Never blocks.
    pub fn poll(&self) -> AppResult<Option<AuditMessage>> {
        match self.reply_rx.try_recv() {
            Ok(message) => Ok(Some(message)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(AppError::AuditDisconnected),
        }
    }

    /// Block until the narrative arrives.
    pub fn wait(self) -> AppResult<CollaboratorReply> {
        for message in self.reply_rx.iter() {
            if let AuditMessage::Complete { reply } = message {
                return Ok(reply);
            }
        }
        Err(AppError::AuditDisconnected)
    }
}
