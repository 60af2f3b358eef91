//! Interface layer
//! 사용자와 만나는 표면(CLI 파싱, 대화형 쉘)을 담당한다.

pub mod cli;
