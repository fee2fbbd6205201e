/// Прореживание ряда по времени: первая точка остаётся, дальше берём точку,
/// только если с последней оставленной прошло не меньше `interval_ms`.
/// Вход ожидается отсортированным по времени; `interval_ms <= 0` оставляет всё.
pub fn filter_by_interval<T, I, F>(items: I, interval_ms: i64, timestamp: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> i64,
{
    let mut last_kept: Option<i64> = None;
    items
        .into_iter()
        .filter(|item| {
            let ts = timestamp(item);
            let keep = match last_kept {
                None => true,
                Some(last) => interval_ms <= 0 || ts.saturating_sub(last) >= interval_ms,
            };
            if keep {
                last_kept = Some(ts);
            }
            keep
        })
        .collect()
}
