use std::process::ExitCode;

use common::ServiceKind;

fn main() -> ExitCode {
    usr_services::main_for(ServiceKind::Role)
}
