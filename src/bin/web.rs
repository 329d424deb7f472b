//! Single binary web server: JSON API over the tournament service.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! TOURNAMENT_OFFICIALS lists the user ids holding the tournament-official role.
//! Caller identity is taken from the X-User-Id header set by the upstream auth layer.

use actix_web::{
    get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpRequest, HttpResponse, HttpServer, Responder,
};
use cue_bracket_web::{
    InMemoryStore, MatchAuthority, MatchCoordinate, OfficialsOnly, PlayerId, ServerConfig,
    ServiceError, StorageError, Tournament, TournamentDetails, TournamentError, TournamentId,
    TournamentService, TournamentStatus,
};
use serde::Deserialize;

/// Officials only, unless OPEN_OFFICIATING lets every signed-in caller appoint officials
/// and decide matches.
struct WebAuthority {
    open: bool,
    officials: OfficialsOnly,
}

impl MatchAuthority for WebAuthority {
    fn may_decide(&self, caller: PlayerId, tournament: &Tournament) -> bool {
        self.open || self.officials.may_decide(caller, tournament)
    }

    fn may_appoint(&self, caller: PlayerId, tournament: &Tournament) -> bool {
        self.open || self.officials.may_appoint(caller, tournament)
    }
}

type AppState = Data<TournamentService<InMemoryStore, WebAuthority>>;

const USER_HEADER: &str = "X-User-Id";

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    #[serde(flatten)]
    details: TournamentDetails,
    /// One tournament is created per level; none means a single tournament.
    #[serde(default)]
    levels: Vec<String>,
}

#[derive(Deserialize)]
struct UserBody {
    user_id: PlayerId,
}

#[derive(Deserialize)]
struct SetMatchWinnerBody {
    round: usize,
    match_index: usize,
    winner: PlayerId,
}

#[derive(Deserialize)]
struct ListQuery {
    status: Option<TournamentStatus>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

fn error_response(e: ServiceError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        ServiceError::Forbidden(_) => HttpResponse::Forbidden().json(body),
        ServiceError::Storage(StorageError::NotFound(_)) => HttpResponse::NotFound().json(body),
        ServiceError::Storage(StorageError::Conflict { .. }) => HttpResponse::Conflict().json(body),
        ServiceError::Storage(_) => HttpResponse::InternalServerError().json(body),
        ServiceError::Tournament(TournamentError::AlreadyDecided) => {
            HttpResponse::Conflict().json(body)
        }
        ServiceError::Tournament(_) => HttpResponse::BadRequest().json(body),
    }
}

fn caller(req: &HttpRequest) -> Result<PlayerId, HttpResponse> {
    req.headers()
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .ok_or_else(|| {
            HttpResponse::Unauthorized()
                .json(serde_json::json!({ "error": "You must be signed in" }))
        })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "cue-bracket-web",
    })
}

/// Create a tournament (or one per level).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    match state.create(body.details, &body.levels) {
        Ok(tournaments) => HttpResponse::Created().json(tournaments),
        Err(e) => error_response(e),
    }
}

/// List tournaments, optionally filtered by ?status=open|in-progress|completed.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState, query: Query<ListQuery>) -> HttpResponse {
    match state.list(query.status) {
        Ok(tournaments) => HttpResponse::Ok().json(tournaments),
        Err(e) => error_response(e),
    }
}

/// Get a tournament with its bracket (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    match state.get(path.id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(e),
    }
}

/// Register a player (tournament must be open). Registering someone else needs the
/// tournament-official role.
#[post("/api/tournaments/{id}/register")]
async fn api_register(
    state: AppState,
    req: HttpRequest,
    path: Path<TournamentPath>,
    body: Json<UserBody>,
) -> HttpResponse {
    let user = match caller(&req) {
        Ok(u) => u,
        Err(resp) => return resp,
    };
    match state.register(path.id, user, body.user_id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(e),
    }
}

/// Withdraw a player or official (tournament must be open). Withdrawing someone else needs
/// the tournament-official role.
#[post("/api/tournaments/{id}/withdraw")]
async fn api_withdraw(
    state: AppState,
    req: HttpRequest,
    path: Path<TournamentPath>,
    body: Json<UserBody>,
) -> HttpResponse {
    let user = match caller(&req) {
        Ok(u) => u,
        Err(resp) => return resp,
    };
    match state.withdraw(path.id, user, body.user_id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(e),
    }
}

/// Assign an official (tournament must be open, caller needs the tournament-official role).
#[post("/api/tournaments/{id}/officiate")]
async fn api_officiate(
    state: AppState,
    req: HttpRequest,
    path: Path<TournamentPath>,
    body: Json<UserBody>,
) -> HttpResponse {
    let user = match caller(&req) {
        Ok(u) => u,
        Err(resp) => return resp,
    };
    match state.officiate(path.id, user, body.user_id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(e),
    }
}

/// Begin the tournament: build the bracket (Open -> InProgress).
#[post("/api/tournaments/{id}/begin")]
async fn api_begin(state: AppState, req: HttpRequest, path: Path<TournamentPath>) -> HttpResponse {
    let user = match caller(&req) {
        Ok(u) => u,
        Err(resp) => return resp,
    };
    match state.begin(path.id, user) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(e),
    }
}

/// Record the winner of one match; returns the bracket, status and champion.
#[put("/api/tournaments/{id}/matches/winner")]
async fn api_set_match_winner(
    state: AppState,
    req: HttpRequest,
    path: Path<TournamentPath>,
    body: Json<SetMatchWinnerBody>,
) -> HttpResponse {
    let user = match caller(&req) {
        Ok(u) => u,
        Err(resp) => return resp,
    };
    let coord = MatchCoordinate::new(body.round, body.match_index);
    match state.record_result(path.id, user, coord, body.winner) {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => error_response(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };
    log::info!("Starting server at http://{}:{}", config.host, config.port);
    if config.open_officiating {
        log::warn!("OPEN_OFFICIATING is set: any signed-in user may appoint officials, begin tournaments and record results");
    } else if config.official_roles.is_empty() {
        log::warn!("TOURNAMENT_OFFICIALS is empty: no one can appoint officials");
    }

    let state = Data::new(TournamentService::new(
        InMemoryStore::new(),
        WebAuthority {
            open: config.open_officiating,
            officials: OfficialsOnly::new(config.official_roles.iter().copied()),
        },
    ));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_list_tournaments)
            .service(api_get_tournament)
            .service(api_register)
            .service(api_withdraw)
            .service(api_officiate)
            .service(api_begin)
            .service(api_set_match_winner)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
