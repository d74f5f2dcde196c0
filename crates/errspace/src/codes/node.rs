//! Node daemon codes (4000–4099) and user batch script codes (4100–4199).

error_codes! {
    table NODE_ENTRIES;

    // ── Node daemon ───────────────────────────────────────────────
    ERR_NODE_SPAWN_PIPE = 4000 => "Pipe error on task spawn",
    ERR_NODE_KILL_TASK_FAILED = 4001 => "Kill task failed",
    ERR_NODE_INVALID_CREDENTIAL = 4002 => "Invalid job credential",
    ERR_NODE_CREDENTIAL_REVOKED = 4003 => "Job credential revoked",
    ERR_NODE_CREDENTIAL_EXPIRED = 4004 => "Job credential expired",
    ERR_NODE_CREDENTIAL_REPLAYED = 4005 => "Job credential replayed",
    ERR_NODE_CREATE_BATCH_DIR = 4006 => "Slurmd could not create a batch directory",
    ERR_NODE_MODIFY_BATCH_DIR = 4007 => "Slurmd could not chown or chmod a batch directory",
    ERR_NODE_CREATE_BATCH_SCRIPT = 4008 => "Slurmd could not create a batch script",
    ERR_NODE_MODIFY_BATCH_SCRIPT = 4009 => "Slurmd could not chown or chmod a batch script",
    ERR_NODE_SETUP_ENVIRONMENT = 4010 => "Slurmd could not set up environment for batch job",
    ERR_NODE_SHARED_MEMORY = 4011 => "Slurmd shared memory error",
    ERR_NODE_SET_UID_OR_GID = 4012 => "Slurmd could not set UID or GID",
    ERR_NODE_SET_SID = 4013 => "Slurmd could not set session ID",
    ERR_NODE_SPAWN_IO_THREAD = 4014 => "Slurmd could not spawn I/O thread",
    ERR_NODE_FORK_FAILED = 4015 => "Slurmd could not fork batch job",
    ERR_NODE_EXECVE_FAILED = 4016 => "Slurmd could not execve batch job",
    ERR_NODE_IO = 4017 => "Slurmd could not connect IO",
    ERR_NODE_PROLOG_FAILED = 4018 => "Job prolog failed",
    ERR_NODE_EPILOG_FAILED = 4019 => "Job epilog failed",
    ERR_NODE_SESSION_KILLED = 4020 => "Session manager killed",

    // ── User batch script ─────────────────────────────────────────
    ERR_SCRIPT_CHDIR_FAILED = 4100 => "unable to change directory to work directory",
    ERR_SCRIPT_OPEN_OUTPUT_FAILED = 4101 => "cound not open output file",
    ERR_SCRIPT_NON_ZERO_RETURN = 4102 => "Script terminated with non-zero exit code",
}
