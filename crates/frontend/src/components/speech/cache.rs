//! Per-conversation bookkeeping for synthesized audio

/// Audio URLs per answer index, tagged with the conversation generation.
///
/// Clearing the chat bumps the generation, so a synthesis request started
/// before the clear can no longer land in the slot of a newer answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechUrlCache {
    generation: u64,
    urls: Vec<Option<String>>,
}

impl SpeechUrlCache {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, index: usize) -> Option<String> {
        self.urls.get(index).cloned().flatten()
    }

    /// Store `url` for `index` if the request still belongs to this conversation
    pub fn insert(&mut self, generation: u64, index: usize, url: String) -> bool {
        if generation != self.generation {
            return false;
        }
        if self.urls.len() <= index {
            self.urls.resize(index + 1, None);
        }
        self.urls[index] = Some(url);
        true
    }

    /// Forget every URL and start a new generation; returns the dropped URLs
    pub fn clear(&mut self) -> Vec<String> {
        self.generation = self.generation.wrapping_add(1);
        self.urls.drain(..).flatten().collect()
    }
}

/// Playing index after playback of `index` ended or failed.
///
/// Another answer may have started in the meantime; its state is kept.
pub fn release_playback(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) {
        None
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = SpeechUrlCache::default();
        let generation = cache.generation();
        assert!(cache.insert(generation, 2, "blob:a".to_string()));
        assert_eq!(cache.get(2).as_deref(), Some("blob:a"));
        assert_eq!(cache.get(0), None);
        assert_eq!(cache.get(7), None);
    }

    #[test]
    fn test_result_from_before_clear_is_rejected() {
        let mut cache = SpeechUrlCache::default();
        let started = cache.generation();
        assert!(cache.insert(started, 1, "blob:old-1".to_string()));

        assert_eq!(cache.clear(), vec!["blob:old-1".to_string()]);
        assert!(!cache.insert(started, 0, "blob:old-0".to_string()));
        assert_eq!(cache.get(0), None);

        assert!(cache.insert(cache.generation(), 0, "blob:new".to_string()));
        assert_eq!(cache.get(0).as_deref(), Some("blob:new"));
    }

    #[test]
    fn test_release_playback_keeps_other_answer() {
        assert_eq!(release_playback(Some(3), 3), None);
        assert_eq!(release_playback(Some(1), 3), Some(1));
        assert_eq!(release_playback(None, 3), None);
    }
}
