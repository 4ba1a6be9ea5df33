use std::io::{self, Write};

pub const USAGE: &str = "\
Uso: toolbox [opções] [-- argumentos do docker compose]

Prepara o sandbox local do plugin: build com Maven e ciclo de vida dos
containers com docker compose.

Opções:
  -h, --help      Mostra esta ajuda
  -i, --init      Constrói o plugin (se ausente) e cria os containers
  -s, --start     Inicia os containers existentes
  -t, --stop      Para os containers
  -c, --clean     Remove containers e volumes
  -l, --logs      Acompanha os logs dos containers
  -v, --verbose   Log detalhado

O primeiro argumento não reconhecido e todos os seguintes são repassados
ao docker compose.
";

pub fn write_usage(out: &mut dyn Write) -> io::Result<()> {
    out.write_all(USAGE.as_bytes())?;
    out.flush()
}
