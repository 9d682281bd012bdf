use super::{
    ActionCommand,
    ActionOutcome,
    Entity,
    Error,
    EventKind,
    ListCache,
    Model,
    ModelEvent,
    Table,
    TableAction,
};
use crate::transports::Transport;
use std::marker::PhantomData;
use std::sync::Arc;
use chrono::{Duration, Utc};
use tokio::sync::{broadcast, Mutex};

const EVENT_CAPACITY: usize = 64;

/// Runs the operations of model `M` over transport `T`.
pub struct ModelController<M, T>
where
    M: Model,
{
    transport: Arc<T>,
    cache: Mutex<ListCache<M::Item>>,
    events: broadcast::Sender<ModelEvent>,
    _model: PhantomData<fn() -> M>,
}

impl<M, T> ModelController<M, T>
where
    M: Model,
    T: Transport,
{
    /// Creates a new [`ModelController`]. The cached list expires after `cache_ttl`.
    pub fn new(transport: T, cache_ttl: Duration) -> Self {
        Self::with_shared_transport(Arc::new(transport), cache_ttl)
    }
    
    /// Creates a new [`ModelController`] sharing `transport` with other controllers.
    pub fn with_shared_transport(transport: Arc<T>, cache_ttl: Duration) -> Self {
        let (events, _rx) = broadcast::channel(EVENT_CAPACITY);
        
        Self {
            transport,
            cache: Mutex::new(ListCache::new(cache_ttl)),
            events,
            _model: PhantomData,
        }
    }
    
    /// Gets the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
    
    /// Subscribes to the events emitted after successful changes.
    pub fn subscribe(&self) -> broadcast::Receiver<ModelEvent> {
        self.events.subscribe()
    }
    
    /// Fetches every item and replaces the cached list with it.
    ///
    /// If the cache is invalidated while the fetch is in flight, the fetched items are returned
    /// but not cached.
    pub async fn list(&self) -> Result<Vec<M::Item>, Error> {
        let generation = self.cache.lock().await.generation();
        let fetched_at = Utc::now();
        let items = M::list_fn(self.transport.as_ref()).await?;
        
        if self.cache.lock().await.set(items.clone(), fetched_at, generation) {
            log::debug!("Fetched {} {}", items.len(), M::SLUG);
        } else {
            log::debug!("Fetched {} {} after the cache was invalidated, not caching", items.len(), M::SLUG);
        }
        
        Ok(items)
    }
    
    /// Gets the cached list, fetching it first if it expired or was invalidated.
    pub async fn cached(&self) -> Result<Vec<M::Item>, Error> {
        {
            let cache = self.cache.lock().await;
            
            if !cache.is_expired(Utc::now()) {
                return Ok(cache.get().clone());
            }
        }
        
        self.list().await
    }
    
    /// Fetches the list again and notifies subscribers.
    pub async fn refresh(&self) -> Result<Vec<M::Item>, Error> {
        self.invalidate().await;
        
        let items = self.list().await?;
        
        self.emit(EventKind::Refreshed {
            count: items.len(),
        });
        
        Ok(items)
    }
    
    /// Marks the cached list as outdated.
    pub async fn invalidate(&self) {
        self.cache.lock().await.invalidate();
    }
    
    /// Fetches one item.
    pub async fn find(&self, id: &str) -> Result<M::Item, Error> {
        M::find_fn(self.transport.as_ref(), id).await?
            .ok_or_else(|| Error::NotFound {
                slug: M::SLUG,
                id: id.to_string(),
            })
    }
    
    /// Creates an item. The input is checked before anything is sent.
    pub async fn add(&self, input: M::AddInput) -> Result<M::Item, Error> {
        let item = M::add_fn(self.transport.as_ref(), input).await?;
        
        self.changed(EventKind::Created {
            id: item.id().to_string(),
        }).await;
        
        Ok(item)
    }
    
    /// Updates `item`. The input is checked before anything is sent.
    pub async fn update(&self, item: &M::Item, input: M::UpdateInput) -> Result<M::Item, Error> {
        let updated = M::update_fn(self.transport.as_ref(), item, input).await?;
        
        self.changed(EventKind::Updated {
            id: updated.id().to_string(),
        }).await;
        
        Ok(updated)
    }
    
    /// Deletes the item with `id`.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        M::delete_fn(self.transport.as_ref(), id).await?;
        
        self.changed(EventKind::Deleted {
            id: id.to_string(),
        }).await;
        
        Ok(())
    }
    
    /// Runs the model action `name` on `item`, then fetches the list again so state reported
    /// by the service is current. Nothing is changed locally if the action fails.
    ///
    /// Once the service acknowledged the action this succeeds. A failed refresh is only logged
    /// and leaves the cache invalidated.
    pub async fn run_action(&self, name: &str, item: &M::Item) -> Result<(), Error> {
        M::run_action(self.transport.as_ref(), name, item).await?;
        
        self.changed(EventKind::ActionPerformed {
            action: name.to_string(),
            id: item.id().to_string(),
        }).await;
        
        if let Err(error) = self.refresh().await {
            log::warn!("Refreshing {} after {} failed: {}", M::SLUG, name, error);
        }
        
        Ok(())
    }
    
    /// Triggers a table action for `item`.
    pub async fn dispatch(
        &self,
        action: &TableAction,
        item: &M::Item,
    ) -> Result<ActionOutcome<M::Item>, Error> {
        if action.disabled {
            return Err(Error::ActionDisabled(action.name));
        }
        
        match action.command {
            ActionCommand::Edit => Ok(ActionOutcome::Edit(item.clone())),
            ActionCommand::Delete => {
                self.delete(item.id()).await?;
                
                Ok(ActionOutcome::Deleted)
            },
            ActionCommand::Run(name) => {
                self.run_action(name, item).await?;
                
                Ok(ActionOutcome::Performed)
            },
        }
    }
    
    /// Lays out the cached list as a table.
    pub async fn table(&self) -> Result<Table, Error> {
        let items = self.cached().await?;
        
        Ok(Table::build::<M>(&items))
    }
    
    async fn changed(&self, kind: EventKind) {
        self.invalidate().await;
        self.emit(kind);
    }
    
    fn emit(&self, kind: EventKind) {
        let event = ModelEvent {
            slug: M::SLUG,
            kind,
        };
        
        if self.events.send(event).is_err() {
            log::debug!("No subscribers for {} event", M::SLUG);
        }
    }
}
