/// A macro to simplify read-through caching of list pages.
///
/// This macro checks if a value is present in the cache.
/// If found, it returns the cached value.
/// If not found, it awaits the provided future to compute the value,
/// wraps it in an `Arc`, stores it in the cache, and then returns it.
///
/// # Arguments
/// * `$cache`: The cache instance to use. It must have async `get` and `set` methods
///   keyed by `$key` and storing `Arc` values.
/// * `$key`: The key to use for caching the value. Must implement `Clone` and `Display`.
/// * `$block`: A future resolving to `AppResult<T>`, awaited only on a miss.
///
/// # Example
/// ```rust,ignore
/// let page = cached!(self.cache, key, async move {
///     compute_page().await
/// })?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $block:expr) => {{
        if let Some(cached) = $cache.get(&$key).await {
            tracing::debug!(key = %$key, "Cache hit");
            Ok::<_, $crate::error::AppError>(cached)
        } else {
            tracing::debug!(key = %$key, "Cache miss");
            let value = ::std::sync::Arc::new($block.await?);
            $cache.set($key.clone(), ::std::sync::Arc::clone(&value)).await;
            Ok(value)
        }
    }};
}
