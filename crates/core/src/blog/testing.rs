//! Store and claims fixtures shared by the blog tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::auth::Claims;
use crate::query::{CategoryIndex, DatePredicate};
use crate::storage::{RecordStore, Result, StoreError};

use super::Record;

/// Store fake that records every call it receives.
#[derive(Default)]
pub struct RecordingStore {
    records: Mutex<Vec<Record>>,
    calls: Mutex<Vec<String>>,
    failure: Option<StoreError>,
}

impl RecordingStore {
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// A store whose every call fails with `error`.
    pub fn failing(error: StoreError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn put_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.starts_with("put:"))
            .count()
    }

    fn record_call(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn select(&self, keep: impl Fn(&Record) -> bool) -> Vec<Record> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| keep(record))
            .cloned()
            .collect()
    }
}

fn describe(predicate: Option<&DatePredicate>) -> &'static str {
    if predicate.is_some() {
        "filtered"
    } else {
        "none"
    }
}

#[async_trait]
impl RecordStore for RecordingStore {
    async fn get_by_key(&self, id: &str) -> Result<Option<Record>> {
        self.record_call(format!("get_by_key:{id}"))?;
        Ok(self.select(|record| record.id == id).into_iter().next())
    }

    async fn query_index(
        &self,
        index: &CategoryIndex,
        key: &str,
        predicate: Option<&DatePredicate>,
    ) -> Result<Vec<Record>> {
        self.record_call(format!(
            "query_index:{}:{key}:{}",
            index.name,
            describe(predicate)
        ))?;
        Ok(self.select(|record| {
            record.get_str(&index.key_attribute) == Some(key)
                && predicate.is_none_or(|p| p.matches(&record.created_at))
        }))
    }

    async fn scan_all(&self, predicate: Option<&DatePredicate>) -> Result<Vec<Record>> {
        let call = if predicate.is_some() { "filtered" } else { "all" };
        self.record_call(format!("scan_all:{call}"))?;
        Ok(self.select(|record| predicate.is_none_or(|p| p.matches(&record.created_at))))
    }

    async fn put(&self, record: &Record) -> Result<()> {
        self.record_call(format!("put:{}", record.id))?;
        let mut records = self.records.lock().unwrap();
        records.retain(|existing| existing.id != record.id);
        records.push(record.clone());
        Ok(())
    }
}

pub fn claims() -> Claims {
    Claims {
        subject: "user-1".to_string(),
        issuer: "https://issuer.example.com".to_string(),
        username: Some("traveller".to_string()),
        email: None,
        token_use: Some("id".to_string()),
        expires_at: 0,
    }
}
