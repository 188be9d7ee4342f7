//! Configuração do servidor: flags de linha de comando com fallback para variáveis de ambiente

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "pln-web", about = "Chatbot de videojuegos con análisis PLN en español")]
pub struct Config {
    /// Endereço de escuta do servidor HTTP
    #[arg(long, env = "PLN_ADDR", default_value = "0.0.0.0:3000")]
    pub addr: SocketAddr,

    /// Interpretador usado para os colaboradores externos
    #[arg(long, env = "PLN_PYTHON", default_value = "python3")]
    pub python: String,

    /// Pasta com gpt2_processor.py e sentiment_analyzer.py
    #[arg(long, env = "PLN_SCRIPTS_DIR", default_value = "scripts")]
    pub scripts_dir: PathBuf,

    /// Tempo máximo de cada chamada a um colaborador, em milissegundos
    #[arg(long, env = "PLN_COLLABORATOR_TIMEOUT_MS", default_value_t = 30_000)]
    pub collaborator_timeout_ms: u64,

    /// Nunca chama os colaboradores; responde sempre com os fallbacks locais
    #[arg(
        long,
        env = "PLN_DISABLE_COLLABORATORS",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub disable_collaborators: bool,

    /// Arquivos estáticos servidos em /static
    #[arg(long, env = "PLN_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_millis(self.collaborator_timeout_ms)
    }

    /// Pasta de estáticos: a configurada ou `static/` ao lado do crate
    pub fn static_dir(&self) -> PathBuf {
        self.static_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
    }
}
