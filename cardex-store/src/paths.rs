use directories::ProjectDirs;
use std::path::PathBuf;

pub fn data_root() -> PathBuf {
    // org = "cardex", app = "Cardex"
    if let Some(pd) = ProjectDirs::from("com", "cardex", "Cardex") {
        pd.data_dir().to_path_buf()
    } else {
        // Fallback: current dir
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

pub fn default_store_file() -> PathBuf {
    data_root().join("cardex.json")
}
