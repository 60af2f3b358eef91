//! 인증 게이트 명령 디스패처.
//!
//! 세션 상태와 명령 토큰만 보고 논리 연산을 결정하는 순수 함수다.
//! 진단 출력과 상태 변경은 호출자(디스패치 루프와 핸들러)의 몫이다.

use crate::domain::operation::Operation;
use crate::domain::session::Session;

/// 한 토큰에 대한 디스패처의 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Run(Operation),
    Rejected(RejectReason),
}

/// 거부 사유. 미인증 경로와 인증 후 미인식 경로는 서로 다른 진단을 받는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotLoggedIn,
    UnknownCommand,
}

/// 현재 세션에서 토큰이 허용되는지, 어떤 연산인지 판정한다.
///
/// - 미인증 세션은 `login`만 통과시킨다.
/// - 인증된 세션은 어휘 테이블로 연산을 찾되, `login` 재진입은 거부한다
///   (로그아웃 후 다시 로그인해야 한다).
/// - 빈 토큰/미등록 토큰은 모두 거부다.
pub fn classify(session: &Session, token: &str) -> Dispatch {
    if !session.is_authenticated() {
        if token == Operation::Login.token() {
            return Dispatch::Run(Operation::Login);
        }
        return Dispatch::Rejected(RejectReason::NotLoggedIn);
    }

    match Operation::from_token(token) {
        Some(Operation::Login) | None => Dispatch::Rejected(RejectReason::UnknownCommand),
        Some(op) => Dispatch::Run(op),
    }
}
