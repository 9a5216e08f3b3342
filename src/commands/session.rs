use crate::{
    libs::{config::Config, csv_file, messages::Message, store::TaskStore},
    msg_debug, msg_error_anyhow,
};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// The working task file loaded into a store.
pub struct Session {
    pub config: Config,
    pub store: TaskStore,
    path: PathBuf,
}

impl Session {
    /// Loads the task file named by the current configuration.
    pub fn open() -> Result<Self> {
        let config = Config::read()?;
        let path = config.data_path()?;
        Self::open_at(config, path)
    }

    pub fn open_at(config: Config, path: PathBuf) -> Result<Self> {
        let store = TaskStore::load(&path).map_err(|err| msg_error_anyhow!(Message::TaskFileLoadFailed(err.to_string())))?;
        msg_debug!(format!("Loaded {} task(s) from {}", store.len(), path.display()));
        Ok(Self { config, store, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the store back to the task file; the error carries the reason.
    pub fn save(&self) -> Result<()> {
        csv_file::write_tasks(&self.path, self.store.get_all())
            .map_err(|err| msg_error_anyhow!(Message::TaskFileSaveFailed(err.to_string())))?;
        msg_debug!(format!("Saved {} task(s) to {}", self.store.len(), self.path.display()));
        Ok(())
    }
}
