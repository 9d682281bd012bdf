use super::Entity;
use crate::types::DateTime;
use std::ops::Deref;
use chrono::Duration;

/// A cached list of items which expires after a set duration.
#[derive(Debug)]
pub struct ListCache<I> {
    inner: Vec<I>,
    expiry_duration: Duration,
    last_cached: Option<DateTime>,
    generation: u64,
}

impl<I> ListCache<I> {
    /// Creates a new empty [`ListCache`].
    pub fn new(expiry_duration: Duration) -> Self {
        Self {
            inner: Vec::new(),
            expiry_duration,
            last_cached: None,
            generation: 0,
        }
    }
    
    /// Checks if the list needs to be fetched again.
    pub fn is_expired(&self, now: DateTime) -> bool {
        if let Some(last_cached) = self.last_cached {
            now - last_cached > self.expiry_duration
        } else {
            // never cached, or invalidated
            true
        }
    }
    
    /// The current generation. Bumped on every invalidation.
    pub fn generation(&self) -> u64 {
        self.generation
    }
    
    /// Replaces the list with `items` fetched at `fetched_at`. Items from a fetch that started
    /// in an older `generation` are discarded. Returns whether the list was replaced.
    pub fn set(&mut self, items: Vec<I>, fetched_at: DateTime, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        
        self.inner = items;
        self.last_cached = Some(fetched_at);
        true
    }
    
    /// Marks the list as outdated. The items are kept until the next fetch.
    pub fn invalidate(&mut self) {
        self.last_cached = None;
        self.generation += 1;
    }
    
    /// Gets a reference to the inner value.
    pub fn get(&self) -> &Vec<I> {
        &self.inner
    }
    
    /// When the list was last fetched.
    pub fn last_cached(&self) -> Option<DateTime> {
        self.last_cached
    }
}

impl<I> ListCache<I>
where
    I: Entity,
{
    /// Finds a cached item by id.
    pub fn find(&self, id: &str) -> Option<&I> {
        self.inner.iter().find(|item| item.id() == id)
    }
}

impl<I> Deref for ListCache<I> {
    type Target = Vec<I>;
    
    fn deref(&self) -> &Vec<I> {
        &self.inner
    }
}
