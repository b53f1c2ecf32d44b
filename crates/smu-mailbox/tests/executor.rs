// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Exercise ordered channel fallback, throttling and probing against a scripted mailbox.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smu_mailbox::{
    Attempt, CapabilityMap, Channel, CommandOutcome, Delay, EncodeError, Encoding, Endpoint,
    Executor, Family, Mailbox, Operation, ProbeMode, Request, RequestError, Topology,
    TransportError, TEST_MESSAGE, THROTTLE_MS,
};

type Reply = Result<u32, TransportError>;

#[derive(Debug, Default)]
struct ScriptedMailbox {
    replies: Vec<((Channel, u32), Reply)>,
    sent: Vec<(u32, Channel, u32)>,
}

impl ScriptedMailbox {
    fn reply(mut self, channel: Channel, opcode: u32, reply: Reply) -> Self {
        self.replies.push(((channel, opcode), reply));
        self
    }
}

impl Mailbox for ScriptedMailbox {
    fn send(&mut self, opcode: u32, channel: Channel, arg: u32) -> Result<u32, TransportError> {
        self.sent.push((opcode, channel, arg));
        self.replies
            .iter()
            .find(|(key, _)| *key == (channel, opcode))
            .map_or(Err(TransportError::UnknownCommand), |(_, reply)| *reply)
    }
}

#[derive(Debug, Default)]
struct RecordingDelay(Vec<u32>);

impl Delay for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.0.push(ms);
    }
}

fn executor(mailbox: ScriptedMailbox) -> Executor<ScriptedMailbox, RecordingDelay> {
    Executor::new(mailbox, RecordingDelay::default(), CapabilityMap::builtin())
}

#[test]
fn missing_route_is_unsupported_without_io() {
    let mut exec = executor(ScriptedMailbox::default());
    let outcome = exec
        .execute(Family::Matisse, Operation::SetTdcSoc, 60.0)
        .expect("valid request");
    assert_eq!(outcome, CommandOutcome::Unsupported);

    let (mailbox, delay) = exec.into_parts();
    assert!(mailbox.sent.is_empty());
    assert!(delay.0.is_empty());
}

#[test]
fn empty_route_is_unsupported_without_io() {
    let map = CapabilityMap::builtin()
        .with_route(Family::Matisse, Operation::SetPpt, &[])
        .expect("empty route fits");
    let mut exec = Executor::new(ScriptedMailbox::default(), RecordingDelay::default(), map);
    let outcome = exec
        .execute(Family::Matisse, Operation::SetPpt, 90.0)
        .expect("valid request");
    assert!(outcome.is_unsupported());
    assert!(exec.mailbox().sent.is_empty());
}

#[test]
fn fallback_channel_applies_inverse_scaling() {
    let mailbox = ScriptedMailbox::default()
        .reply(Channel::Rsmu, 0x53, Err(TransportError::Failed))
        .reply(Channel::Mp1, 0x3D, Ok(75_000));
    let mut exec = executor(mailbox);

    let outcome = exec
        .execute(Family::Matisse, Operation::SetPpt, 75.0)
        .expect("valid request");
    assert_eq!(outcome, CommandOutcome::Applied(75.0));

    let (mailbox, delay) = exec.into_parts();
    assert_eq!(
        mailbox.sent,
        vec![(0x53, Channel::Rsmu, 75_000), (0x3D, Channel::Mp1, 75_000)]
    );
    assert_eq!(delay.0, vec![THROTTLE_MS, THROTTLE_MS]);
}

#[test]
fn firmware_clamp_is_reported_not_the_request() {
    let mailbox = ScriptedMailbox::default().reply(Channel::Rsmu, 0x53, Ok(142_000));
    let mut exec = executor(mailbox);
    let outcome = exec
        .execute(Family::Vermeer, Operation::SetPpt, 500.0)
        .expect("valid request");
    assert_eq!(outcome.applied(), Some(142.0));
    assert_eq!(exec.mailbox().sent.len(), 1);
}

#[test]
fn success_on_second_endpoint_skips_the_third() {
    let endpoints = [
        Endpoint::new(Channel::Rsmu, 0x10, Encoding::Milli),
        Endpoint::new(Channel::Mp1, 0x20, Encoding::Milli),
        Endpoint::new(Channel::Hsmp, 0x30, Encoding::Milli),
    ];
    let map = CapabilityMap::empty()
        .with_route(Family::Milan, Operation::SetPpt, &endpoints)
        .expect("three endpoints fit");
    let mailbox = ScriptedMailbox::default()
        .reply(Channel::Rsmu, 0x10, Err(TransportError::Busy))
        .reply(Channel::Mp1, 0x20, Ok(200_000))
        .reply(Channel::Hsmp, 0x30, Ok(200_000));
    let mut exec = Executor::new(mailbox, RecordingDelay::default(), map);

    let outcome = exec
        .execute(Family::Milan, Operation::SetPpt, 200.0)
        .expect("valid request");
    assert_eq!(outcome, CommandOutcome::Applied(200.0));
    let sent: Vec<u32> = exec.mailbox().sent.iter().map(|(op, _, _)| *op).collect();
    assert_eq!(sent, vec![0x10, 0x20]);
}

#[test]
fn exhausted_route_reports_each_attempt() {
    let mailbox = ScriptedMailbox::default()
        .reply(Channel::Rsmu, 0x54, Err(TransportError::Rejected))
        .reply(Channel::Mp1, 0x3B, Err(TransportError::Timeout));
    let mut exec = executor(mailbox);

    let outcome = exec
        .execute(Family::CastlePeak, Operation::SetTdc, 95.0)
        .expect("valid request");
    let attempts = match outcome {
        CommandOutcome::DeviceError(attempts) => attempts,
        other => panic!("expected device error, got {other:?}"),
    };
    assert_eq!(
        attempts.as_slice(),
        &[
            Attempt {
                channel: Channel::Rsmu,
                opcode: 0x54,
                error: TransportError::Rejected
            },
            Attempt {
                channel: Channel::Mp1,
                opcode: 0x3B,
                error: TransportError::Timeout
            },
        ]
    );
    let (_, delay) = exec.into_parts();
    assert_eq!(delay.0.len(), 2);
}

#[test]
fn probe_sends_only_the_test_message() {
    let mailbox = ScriptedMailbox::default()
        .reply(Channel::Rsmu, TEST_MESSAGE, Err(TransportError::ChannelUnavailable))
        .reply(Channel::Mp1, TEST_MESSAGE, Ok(1));
    let mut exec = executor(mailbox);

    assert!(exec.is_supported(Family::Matisse, Operation::SetPpt));

    let (mailbox, delay) = exec.into_parts();
    assert_eq!(
        mailbox.sent,
        vec![(TEST_MESSAGE, Channel::Rsmu, 0), (TEST_MESSAGE, Channel::Mp1, 0)]
    );
    assert!(mailbox.sent.iter().all(|(op, _, _)| *op != 0x53 && *op != 0x3D));
    assert_eq!(delay.0, vec![THROTTLE_MS, THROTTLE_MS]);
}

#[test]
fn probe_of_unmapped_operation_stays_silent() {
    let mut exec = executor(ScriptedMailbox::default());
    assert_eq!(
        exec.probe(Family::Threadripper, Operation::SetPpt),
        CommandOutcome::Unsupported
    );
    assert!(!exec.is_supported(Family::Matisse, Operation::EnableEco));
    assert!(exec.mailbox().sent.is_empty());
}

#[test]
fn route_only_probe_skips_the_mailbox() {
    let mut exec = executor(ScriptedMailbox::default()).with_probe_mode(ProbeMode::RouteOnly);
    assert!(exec.is_supported(Family::Renoir, Operation::SetStapm));
    assert!(!exec.is_supported(Family::Cezanne, Operation::EnableEco));
    assert!(exec.mailbox().sent.is_empty());
}

#[test]
fn probe_fails_when_no_channel_answers() {
    let mut exec = executor(ScriptedMailbox::default());
    let outcome = exec.probe(Family::Vermeer, Operation::SetThm);
    assert!(matches!(outcome, CommandOutcome::DeviceError(ref a) if a.len() == 2));
}

#[test]
fn submitted_support_check_matches_the_direct_check() {
    let mailbox = ScriptedMailbox::default().reply(Channel::Rsmu, TEST_MESSAGE, Ok(1));
    let mut exec = executor(mailbox);

    let submitted = exec
        .submit(Family::Vermeer, &Request::probe(Operation::SetPpt))
        .expect("support checks are never encoded");
    assert_eq!(submitted, CommandOutcome::Applied(1.0));
    assert_eq!(exec.probe(Family::Vermeer, Operation::SetPpt), submitted);

    let unmapped = exec
        .submit(Family::Vermeer, &Request::probe(Operation::SetPptApu))
        .expect("support checks are never encoded");
    assert_eq!(unmapped, CommandOutcome::Unsupported);

    let (mailbox, _) = exec.into_parts();
    assert_eq!(
        mailbox.sent,
        vec![(TEST_MESSAGE, Channel::Rsmu, 0), (TEST_MESSAGE, Channel::Rsmu, 0)]
    );
}

#[test]
fn core_operation_without_core_is_rejected_before_io() {
    let mut exec = executor(ScriptedMailbox::default());
    let err = exec
        .execute(Family::Vermeer, Operation::SetCoreOffset, -5.0)
        .unwrap_err();
    assert_eq!(
        err,
        RequestError {
            operation: Operation::SetCoreOffset,
            source: EncodeError::MissingCore
        }
    );
    assert!(exec.mailbox().sent.is_empty());
}

#[test]
fn out_of_range_setpoint_is_rejected_before_io() {
    let mut exec = executor(ScriptedMailbox::default());
    let err = exec
        .execute(Family::Renoir, Operation::SetStapm, -15.0)
        .unwrap_err();
    assert_eq!(err.source, EncodeError::OutOfRange);
    assert!(exec.mailbox().sent.is_empty());
}

#[test]
fn zen3_core_offset_targets_die_and_core() {
    // Two dies, slot 2 fused off on the first.
    let topology = Topology::from_disabled_mask(0b100, 2, 1, 15);
    let core = topology.address(11).expect("enabled core");
    assert_eq!((core.physical, core.die, core.local), (12, 1, 4));

    let mailbox = ScriptedMailbox::default().reply(Channel::Rsmu, 0x0A, Ok(0xFFF1));
    let mut exec = executor(mailbox);
    let outcome = exec
        .execute_core(Family::Vermeer, Operation::SetCoreOffset, core, -15.0)
        .expect("valid request");
    assert_eq!(outcome, CommandOutcome::Applied(-15.0));
    assert_eq!(exec.mailbox().sent, vec![(0x0A, Channel::Rsmu, 0x1040_FFF1)]);
}

#[test]
fn apu_core_query_sends_the_bare_core_id() {
    let topology = Topology::from_disabled_mask(0, 1, 1, 8);
    let core = topology.address(6).expect("enabled core");
    let mailbox = ScriptedMailbox::default().reply(Channel::Rsmu, 0xC3, Ok(-7i32 as u32));
    let mut exec = executor(mailbox);
    let outcome = exec
        .execute_core(Family::Cezanne, Operation::GetCoreOffset, core, 0.0)
        .expect("valid request");
    assert_eq!(outcome.applied(), Some(-7.0));
    assert_eq!(exec.mailbox().sent, vec![(0xC3, Channel::Rsmu, 6)]);
}

#[test]
fn all_core_offset_masks_to_sixteen_bits() {
    let mailbox = ScriptedMailbox::default().reply(Channel::Rsmu, 0xB1, Ok(0xFFF6));
    let mut exec = executor(mailbox);
    let outcome = exec
        .execute(Family::Cezanne, Operation::SetAllCoreOffset, -10.0)
        .expect("valid request");
    assert_eq!(outcome.applied(), Some(-10.0));
    assert_eq!(exec.mailbox().sent, vec![(0xB1, Channel::Rsmu, 0xFFF6)]);
}

#[test]
fn scalar_query_decodes_float_bits() {
    let mailbox = ScriptedMailbox::default().reply(Channel::Rsmu, 0x6C, Ok(2.0f32.to_bits()));
    let mut exec = executor(mailbox);
    let outcome = exec
        .query(Family::Matisse, Operation::GetScalar)
        .expect("valid request");
    assert_eq!(outcome, CommandOutcome::Applied(2.0));
    assert_eq!(exec.mailbox().sent, vec![(0x6C, Channel::Rsmu, 0)]);
}

#[test]
fn random_failures_never_outrun_the_route() {
    let map = CapabilityMap::builtin();
    let mut rng = StdRng::seed_from_u64(0x5EED_0F_F00D);
    for _ in 0..200 {
        let family = Family::ALL[rng.random_range(0..Family::ALL.len())];
        let operation = Operation::ALL[rng.random_range(0..Operation::ALL.len())];
        let route = map.route(family, operation).to_vec();
        let mut mailbox = ScriptedMailbox::default();
        for endpoint in &route {
            let reply = if rng.random_bool(0.5) {
                Ok(1000)
            } else {
                Err(TransportError::Failed)
            };
            mailbox = mailbox.reply(endpoint.channel, endpoint.opcode, reply);
        }
        let mut exec = Executor::new(mailbox, RecordingDelay::default(), map.clone());
        let request = smu_mailbox::Request::set(operation, 1.0).on_core(topology_core());
        let outcome = exec.submit(family, &request).expect("valid request");

        let (mailbox, delay) = exec.into_parts();
        assert!(mailbox.sent.len() <= route.len());
        assert_eq!(delay.0.len(), mailbox.sent.len());
        match outcome {
            CommandOutcome::Unsupported => assert!(route.is_empty()),
            CommandOutcome::Applied(_) => {
                let last = mailbox.sent.last().expect("a send preceded success");
                assert!(mailbox
                    .replies
                    .iter()
                    .any(|(key, reply)| *key == (last.1, last.0) && reply.is_ok()));
            }
            CommandOutcome::DeviceError(attempts) => {
                assert_eq!(attempts.len(), route.len());
            }
        }
    }
}

fn topology_core() -> smu_mailbox::CoreAddress {
    Topology::from_disabled_mask(0, 1, 1, 8)
        .address(0)
        .expect("core zero")
}
