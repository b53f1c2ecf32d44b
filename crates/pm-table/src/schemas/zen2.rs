// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Zen 2 desktop and APU PM table layouts.
// Author: Lukas Bower

use crate::field::ArrayField::*;
use crate::field::Field::*;
use crate::schema::{at, element, run, strided, Generation, Schema, SchemaFlags};

/// Layout reported as version `0x240903`.
pub const PM_TABLE_240903: Schema = Schema {
    version: 0x0024_0903,
    generation: Generation::Zen2,
    core_capacity: 8,
    cache_capacity: 2,
    min_size: 1304,
    flags: SchemaFlags::empty(),
    bindings: &[
        at(PptLimit, 0),
        at(PptValue, 1),
        at(TdcLimit, 2),
        at(TdcValue, 3),
        at(ThmLimit, 4),
        at(ThmValue, 5),
        at(FitLimit, 6),
        at(FitValue, 7),
        at(EdcLimit, 8),
        at(EdcValue, 9),
        at(VidLimit, 10),
        at(VidValue, 11),
        at(PptWc, 12),
        at(PptActual, 13),
        at(TdcWc, 14),
        at(TdcActual, 15),
        at(ThmWc, 16),
        at(ThmActual, 17),
        at(FitWc, 18),
        at(FitActual, 19),
        at(EdcWc, 20),
        at(EdcActual, 21),
        at(VidWc, 22),
        at(VidActual, 23),
        at(VddcrCpuPower, 24),
        at(VddcrSocPower, 25),
        at(VddioMemPower, 26),
        at(Vdd18Power, 27),
        at(RocPower, 28),
        at(SocketPower, 29),
        at(PptFrequency, 30),
        at(TdcFrequency, 31),
        at(ThmFrequency, 32),
        at(ProchotFrequency, 33),
        at(VoltageFrequency, 34),
        at(CcaFrequency, 35),
        at(FitVoltage, 36),
        at(FitPreVoltage, 37),
        at(LatchupVoltage, 38),
        at(CpuSetVoltage, 39),
        at(CpuTelemetryVoltage, 40),
        at(CpuTelemetryCurrent, 41),
        at(CpuTelemetryPower, 42),
        at(SocSetVoltage, 44),
        at(SocTelemetryVoltage, 45),
        at(SocTelemetryCurrent, 46),
        at(SocTelemetryPower, 47),
        at(FclkFreq, 48),
        at(FclkFreqEff, 49),
        at(UclkFreq, 50),
        at(MemclkFreq, 51),
        at(FclkDramSetpoint, 52),
        at(FclkDramBusy, 53),
        at(FclkGmiSetpoint, 54),
        at(FclkGmiBusy, 55),
        at(FclkIohcSetpoint, 56),
        at(FclkIohcBusy, 57),
        at(FclkXgmiSetpoint, 58),
        at(FclkXgmiBusy, 59),
        at(CcmReads, 60),
        at(CcmWrites, 61),
        at(Ioms, 62),
        at(Xgmi, 63),
        at(CsUmcReads, 64),
        at(CsUmcWrites, 65),
        run(FclkResidency, 66, 4),
        run(FclkFreqTable, 70, 4),
        run(UclkFreqTable, 74, 4),
        run(MemclkFreqTable, 78, 4),
        run(FclkVoltage, 82, 4),
        strided(LclkSetpoint, 86, 4, 6),
        strided(LclkBusy, 87, 4, 6),
        strided(LclkFreq, 88, 4, 6),
        strided(LclkFreqEff, 89, 4, 6),
        strided(LclkMaxDpm, 90, 4, 6),
        strided(LclkMinDpm, 91, 4, 6),
        at(XgmiSetpoint, 110),
        at(XgmiBusy, 111),
        at(XgmiLaneWidth, 112),
        at(XgmiDataRate, 113),
        at(SocPower, 114),
        at(SocTemp, 115),
        at(DdrVddpPower, 116),
        at(DdrVddioMemPower, 117),
        at(Gmi2VddgPower, 118),
        at(IoVddcrSocPower, 119),
        at(IodVddioMemPower, 120),
        at(IoVdd18Power, 121),
        at(Tdp, 122),
        at(Determinism, 123),
        at(VVddgCcd, 124),
        at(VVddp, 125),
        at(VVddgIod, 126),
        at(PeakTemp, 127),
        at(PeakVoltage, 128),
        at(AvgCoreCount, 129),
        at(CclkLimit, 130),
        at(MaxSocVoltage, 131),
        at(DcBtc, 132),
        at(CstateBoost, 133),
        at(Prochot, 134),
        at(Pc6, 135),
        at(Pwm, 136),
        at(Socclk, 137),
        at(Shubclk, 138),
        at(Mp0clk, 139),
        at(Mp1clk, 140),
        at(Mp5clk, 141),
        at(Smnclk, 142),
        at(Twixclk, 143),
        at(Waflclk, 144),
        at(DpmBusy, 145),
        at(Mp1Busy, 146),
        run(CorePower, 147, 8),
        run(CoreVoltage, 155, 8),
        run(CoreTemp, 163, 8),
        run(CoreFit, 171, 8),
        run(CoreIddmax, 179, 8),
        run(CoreFreq, 187, 8),
        run(CoreFreqeff, 195, 8),
        run(CoreC0, 203, 8),
        run(CoreCc1, 211, 8),
        run(CoreCc6, 219, 8),
        run(CoreCksFdd, 227, 8),
        run(CoreCiFdd, 235, 8),
        run(CoreIrm, 243, 8),
        run(CorePstate, 251, 8),
        run(CoreFreqLimMax, 259, 8),
        run(CoreFreqLimMin, 267, 8),
        run(CoreScLimit, 275, 8),
        run(CoreScCac, 283, 8),
        run(CoreScResidency, 291, 8),
        run(L3LogicPower, 299, 2),
        run(L3VddmPower, 301, 2),
        run(L3Temp, 303, 2),
        run(L3Fit, 305, 2),
        run(L3Iddmax, 307, 2),
        run(L3Freq, 309, 2),
        run(L3CksFdd, 311, 2),
        run(L3CcaThreshold, 313, 2),
        run(L3CcaCac, 315, 2),
        run(L3CcaActivation, 317, 2),
        run(L3EdcLimit, 319, 2),
        run(L3EdcCac, 321, 2),
        run(L3EdcResidency, 323, 2),
        element(Mp5Busy, 0, 325),
    ],
};

/// Layout reported as version `0x240803`.
pub const PM_TABLE_240803: Schema = Schema {
    version: 0x0024_0803,
    generation: Generation::Zen2,
    core_capacity: 16,
    cache_capacity: 4,
    min_size: 2020,
    flags: SchemaFlags::empty(),
    bindings: &[
        at(PptLimit, 0),
        at(PptValue, 1),
        at(TdcLimit, 2),
        at(TdcValue, 3),
        at(ThmLimit, 4),
        at(ThmValue, 5),
        at(FitLimit, 6),
        at(FitValue, 7),
        at(EdcLimit, 8),
        at(EdcValue, 9),
        at(VidLimit, 10),
        at(VidValue, 11),
        at(PptWc, 12),
        at(PptActual, 13),
        at(TdcWc, 14),
        at(TdcActual, 15),
        at(ThmWc, 16),
        at(ThmActual, 17),
        at(FitWc, 18),
        at(FitActual, 19),
        at(EdcWc, 20),
        at(EdcActual, 21),
        at(VidWc, 22),
        at(VidActual, 23),
        at(VddcrCpuPower, 24),
        at(VddcrSocPower, 25),
        at(VddioMemPower, 26),
        at(Vdd18Power, 27),
        at(RocPower, 28),
        at(SocketPower, 29),
        at(PptFrequency, 30),
        at(TdcFrequency, 31),
        at(ThmFrequency, 32),
        at(ProchotFrequency, 33),
        at(VoltageFrequency, 34),
        at(CcaFrequency, 35),
        at(FitVoltage, 37),
        at(FitPreVoltage, 38),
        at(LatchupVoltage, 39),
        at(CpuSetVoltage, 40),
        at(CpuTelemetryVoltage, 41),
        at(CpuTelemetryCurrent, 42),
        at(CpuTelemetryPower, 43),
        at(SocSetVoltage, 44),
        at(SocTelemetryVoltage, 45),
        at(SocTelemetryCurrent, 46),
        at(SocTelemetryPower, 47),
        at(FclkFreq, 48),
        at(FclkFreqEff, 49),
        at(UclkFreq, 50),
        at(MemclkFreq, 51),
        at(FclkDramSetpoint, 52),
        at(FclkDramBusy, 53),
        at(FclkGmiSetpoint, 54),
        at(FclkGmiBusy, 55),
        at(FclkIohcSetpoint, 56),
        at(FclkIohcBusy, 57),
        at(FclkXgmiSetpoint, 58),
        at(FclkXgmiBusy, 59),
        at(CcmReads, 60),
        at(CcmWrites, 61),
        at(Ioms, 62),
        at(Xgmi, 63),
        at(CsUmcReads, 64),
        at(CsUmcWrites, 65),
        run(FclkResidency, 66, 4),
        run(FclkFreqTable, 70, 4),
        run(UclkFreqTable, 74, 4),
        run(MemclkFreqTable, 78, 4),
        run(FclkVoltage, 82, 4),
        strided(LclkSetpoint, 86, 4, 6),
        strided(LclkBusy, 87, 4, 6),
        strided(LclkFreq, 88, 4, 6),
        strided(LclkFreqEff, 89, 4, 6),
        strided(LclkMaxDpm, 90, 4, 6),
        strided(LclkMinDpm, 91, 4, 6),
        at(XgmiSetpoint, 110),
        at(XgmiBusy, 111),
        at(XgmiLaneWidth, 112),
        at(XgmiDataRate, 113),
        at(SocPower, 114),
        at(SocTemp, 115),
        at(DdrVddpPower, 116),
        at(DdrVddioMemPower, 117),
        at(Gmi2VddgPower, 118),
        at(IoVddcrSocPower, 119),
        at(IodVddioMemPower, 120),
        at(IoVdd18Power, 121),
        at(Tdp, 122),
        at(Determinism, 123),
        at(VVddm, 124),
        at(VVddp, 125),
        at(VVddg, 126),
        at(PeakTemp, 127),
        at(PeakVoltage, 128),
        at(AvgCoreCount, 129),
        at(CclkLimit, 130),
        at(MaxSocVoltage, 131),
        at(DcBtc, 132),
        at(CstateBoost, 133),
        at(Prochot, 134),
        at(Pc6, 135),
        at(Pwm, 136),
        at(Socclk, 137),
        at(Shubclk, 138),
        at(Mp0clk, 139),
        at(Mp1clk, 140),
        at(Mp5clk, 141),
        at(Smnclk, 142),
        at(Twixclk, 143),
        at(Waflclk, 144),
        at(DpmBusy, 145),
        at(Mp1Busy, 146),
        run(CorePower, 147, 16),
        run(CoreVoltage, 163, 16),
        run(CoreTemp, 179, 16),
        run(CoreFit, 195, 16),
        run(CoreIddmax, 211, 16),
        run(CoreFreq, 227, 16),
        run(CoreFreqeff, 243, 16),
        run(CoreC0, 259, 16),
        run(CoreCc1, 275, 16),
        run(CoreCc6, 291, 16),
        run(CoreCksFdd, 307, 16),
        run(CoreCiFdd, 323, 16),
        run(CoreIrm, 339, 16),
        run(CorePstate, 355, 16),
        run(CoreFreqLimMax, 371, 16),
        run(CoreFreqLimMin, 387, 16),
        run(CoreScLimit, 403, 16),
        run(CoreScCac, 419, 16),
        run(CoreScResidency, 435, 16),
        run(L3LogicPower, 451, 4),
        run(L3VddmPower, 455, 4),
        run(L3Temp, 459, 4),
        run(L3Fit, 463, 4),
        run(L3Iddmax, 467, 4),
        run(L3Freq, 471, 4),
        run(L3CksFdd, 475, 4),
        run(L3CcaThreshold, 479, 4),
        run(L3CcaCac, 483, 4),
        run(L3CcaActivation, 487, 4),
        run(L3EdcLimit, 491, 4),
        run(L3EdcCac, 495, 4),
        run(L3EdcResidency, 499, 4),
        run(Mp5Busy, 503, 2),
    ],
};

/// Layout reported as version `0x370003`.
pub const PM_TABLE_370003: Schema = Schema {
    version: 0x0037_0003,
    generation: Generation::Zen2,
    core_capacity: 8,
    cache_capacity: 1,
    min_size: 2184,
    flags: SchemaFlags::HAS_GRAPHICS.union(SchemaFlags::POWER_SUM_UNRELIABLE),
    bindings: &[
        at(StapmLimit, 0),
        at(StapmValue, 1),
        at(PptLimitFast, 2),
        at(PptValueFast, 3),
        at(PptLimit, 4),
        at(PptValue, 5),
        at(PptLimitApu, 6),
        at(PptValueApu, 7),
        at(TdcLimit, 8),
        at(TdcValue, 9),
        at(TdcLimitSoc, 10),
        at(TdcValueSoc, 11),
        at(EdcLimit, 12),
        at(EdcValue, 13),
        at(EdcLimitSoc, 14),
        at(EdcValueSoc, 15),
        at(ThmLimit, 16),
        at(ThmValue, 17),
        at(ThmLimitGfx, 18),
        at(ThmValueGfx, 19),
        at(ThmLimitSoc, 20),
        at(ThmValueSoc, 21),
        at(SttLimitApu, 22),
        at(SttValueApu, 23),
        at(SttLimitDgpu, 24),
        at(SttValueDgpu, 25),
        at(FitLimit, 26),
        at(FitValue, 27),
        at(VidLimit, 28),
        at(VidValue, 29),
        at(Psi0LimitVdd, 30),
        at(Psi0ResidencyVdd, 31),
        at(Psi0LimitSoc, 32),
        at(Psi0ResidencySoc, 33),
        at(VddcrCpuPower, 34),
        at(VddcrSocPower, 35),
        at(VddioMemPower, 36),
        at(RocPower, 37),
        at(SocketPower, 38),
        at(Tdp, 38),
        at(PackagePower, 38),
        at(GlobFrequency, 39),
        at(StapmFrequency, 40),
        at(PptFrequencyFast, 41),
        at(PptFrequency, 42),
        at(PptFrequencyApu, 43),
        at(TdcFrequency, 44),
        at(ThmFrequency, 45),
        at(HtfmaxFrequency, 46),
        at(ProchotFrequency, 47),
        at(VoltageFrequency, 48),
        at(CcaFrequency, 49),
        at(GfxGlobFrequency, 50),
        at(GfxStapmFrequency, 51),
        at(GfxPptFrequencyFast, 52),
        at(GfxPptFrequency, 53),
        at(GfxPptFrequencyApu, 54),
        at(GfxTdcFrequency, 55),
        at(GfxThmFrequency, 56),
        at(GfxHtfmaxFrequency, 57),
        at(GfxProchotFrequency, 58),
        at(GfxVoltageFrequency, 59),
        at(GfxCcaFrequency, 60),
        at(GfxDemFrequency, 60),
        at(FitVoltage, 61),
        at(LatchupVoltage, 62),
        at(CoreSetpoint, 63),
        at(CoreBusy, 64),
        at(GfxSetpoint, 65),
        at(FclkCclkSetpoint, 67),
        at(FclkCclkFreq, 68),
        at(FclkGfxSetpoint, 69),
        at(FclkGfxBusy, 70),
        at(FclkIohcSetpoint, 71),
        at(FclkIohcBusy, 72),
        at(FclkDramSetpoint, 73),
        at(FclkDramBusy, 74),
        element(LclkSetpoint, 0, 75),
        element(LclkBusy, 0, 76),
        run(FclkResidency, 77, 4),
        run(FclkFreqTable, 81, 4),
        run(UclkFreqTable, 85, 4),
        run(MemclkFreqTable, 89, 4),
        run(FclkVoltage, 93, 4),
        at(CpuSetVoltage, 97),
        at(CpuTelemetryVoltage, 98),
        at(CpuTelemetryCurrent, 99),
        at(CpuTelemetryPower, 100),
        at(SocSetVoltage, 101),
        at(SocTelemetryVoltage, 102),
        at(SocTelemetryCurrent, 103),
        at(SocTelemetryPower, 104),
        at(DfBusy, 165),
        at(VcnBusy, 166),
        at(IohcBusy, 167),
        at(MmhubBusy, 168),
        at(AthubBusy, 169),
        at(OsssysBusy, 170),
        at(HdpBusy, 171),
        at(SdmaBusy, 172),
        at(ShubBusy, 173),
        at(BifBusy, 174),
        at(AcpBusy, 175),
        at(Sst0Busy, 176),
        at(Sst1Busy, 177),
        at(Usb0Busy, 178),
        at(Usb1Busy, 179),
        at(CcmReads, 180),
        at(CcmWrites, 181),
        at(Gcm64bReads, 182),
        at(Gcm64bWrites, 183),
        at(Gcm32bReadsWrites, 184),
        at(MmhubReads, 185),
        at(MmhubWrites, 186),
        at(DceReads, 187),
        at(IoReadsWrites, 188),
        at(CsUmcReads, 189),
        at(CsUmcWrites, 190),
        at(MaxDramBandwidth, 191),
        run(CorePower, 192, 8),
        run(CoreVoltage, 200, 8),
        run(CoreTemp, 208, 8),
        run(CoreFit, 216, 8),
        run(CoreIddmax, 224, 8),
        run(CoreFreq, 232, 8),
        run(CoreFreqeff, 240, 8),
        run(CoreC0, 248, 8),
        run(CoreCc1, 256, 8),
        run(CoreCc6, 264, 8),
        run(CoreCksFdd, 272, 8),
        run(CorePstate, 280, 8),
        run(CoreCppcMax, 288, 8),
        run(CoreCppcMin, 296, 8),
        run(CoreCppcEpp, 304, 8),
        run(CoreScLimit, 312, 8),
        run(CoreScCac, 320, 8),
        run(CoreScResidency, 328, 8),
        element(L3LogicPower, 0, 336),
        element(L3VddmPower, 0, 338),
        element(L3Temp, 0, 340),
        element(L3Fit, 0, 342),
        element(L3Iddmax, 0, 344),
        element(L3Freq, 0, 346),
        element(L3FreqEff, 0, 348),
        element(L3CksFdd, 0, 350),
        element(L3CcaThreshold, 0, 352),
        element(L3CcaCac, 0, 354),
        element(L3CcaActivation, 0, 356),
        element(L3EdcLimit, 0, 358),
        element(L3EdcCac, 0, 360),
        element(L3EdcResidency, 0, 362),
        at(GfxVoltage, 362),
        at(GfxTemp, 363),
        at(GfxIddmax, 364),
        at(GfxFreq, 365),
        at(GfxFreqeff, 366),
        at(GfxBusy, 367),
        at(GfxCgpg, 368),
        at(GfxEdcLim, 369),
        at(GfxEdcResidency, 370),
        at(FclkFreq, 371),
        at(UclkFreq, 372),
        at(MemclkFreq, 373),
        at(VclkFreq, 374),
        at(DclkFreq, 375),
        at(Socclk, 376),
        element(LclkFreq, 0, 377),
        at(Shubclk, 378),
        at(Mp0clk, 379),
        at(DcfFreq, 380),
        at(FclkFreqEff, 381),
        at(UclkFreqEff, 382),
        at(MemclkFreqEff, 383),
        at(VclkFreqEff, 384),
        at(DclkFreqEff, 385),
        element(SocclkFreqEff, 0, 386),
        element(LclkFreqEff, 0, 387),
        element(ShubclkFreqEff, 0, 388),
        at(Mp0clkEff, 389),
        at(DcfFreqEff, 390),
        run(VclkState, 391, 8),
        run(DclkState, 399, 8),
        run(SocclkState, 407, 8),
        run(LclkState, 415, 8),
        run(ShubState, 423, 8),
        run(Mp0State, 431, 8),
        run(DcfclkState, 439, 8),
        run(VcnStateResidency, 447, 8),
        run(SocclkStateResidency, 455, 8),
        run(LclkStateResidency, 463, 8),
        run(ShubStateResidency, 471, 8),
        run(Mp0clkStateResidency, 479, 8),
        run(DcfclkStateResidency, 487, 8),
        run(VddcrSocVoltage, 495, 8),
        at(Cpuoff, 503),
        at(CpuoffCnt, 504),
        at(Gfxoff, 505),
        at(GfxoffCnt, 506),
        at(Vddoff, 507),
        at(VddoffCnt, 508),
        at(Ulv, 509),
        at(UlvCnt, 510),
        at(S0i2, 511),
        at(S0i2Cnt, 512),
        at(Whisper, 513),
        at(WhisperCnt, 514),
        at(Selfrefresh0, 515),
        at(Selfrefresh1, 516),
        at(PllPowerdown0, 517),
        at(PllPowerdown1, 518),
        at(PllPowerdown2, 519),
        at(PllPowerdown3, 520),
        at(PllPowerdown4, 521),
        at(DgpuPower, 523),
        at(DgpuGfxBusy, 524),
        at(DgpuFreqTarget, 525),
        at(VVddm, 526),
        at(VVddp, 527),
        at(DdrPhyPower, 528),
        at(IodVddioMemPower, 529),
        at(IoVdd18Power, 530),
        at(IoDisplayPower, 531),
        at(IoUsbPower, 532),
        at(UlvVoltage, 533),
        at(PeakTemp, 534),
        at(PeakVoltage, 535),
        at(AvgCoreCount, 536),
        at(MaxCoreVoltage, 537),
        at(DcBtc, 538),
        at(CstateBoost, 539),
        at(Prochot, 540),
        at(Pwm, 541),
        at(Fps, 542),
        at(DisplayCount, 543),
        at(StapmTimeConstant, 544),
        at(SlowPptTimeConstant, 545),
    ],
};

/// Layout reported as version `0x370005`.
pub const PM_TABLE_370005: Schema = Schema {
    version: 0x0037_0005,
    generation: Generation::Zen2,
    core_capacity: 8,
    cache_capacity: 1,
    min_size: 2248,
    flags: SchemaFlags::HAS_GRAPHICS.union(SchemaFlags::POWER_SUM_UNRELIABLE),
    bindings: &[
        at(StapmLimit, 0),
        at(StapmValue, 1),
        at(PptLimitFast, 2),
        at(PptValueFast, 3),
        at(PptLimit, 4),
        at(PptValue, 5),
        at(PptLimitApu, 6),
        at(PptValueApu, 7),
        at(TdcLimit, 8),
        at(TdcValue, 9),
        at(TdcLimitSoc, 10),
        at(TdcValueSoc, 11),
        at(EdcLimit, 12),
        at(EdcValue, 13),
        at(ThmLimit, 16),
        at(ThmValue, 17),
        at(ThmLimitGfx, 18),
        at(ThmValueGfx, 19),
        at(ThmLimitSoc, 20),
        at(ThmValueSoc, 21),
        at(SttLimitApu, 22),
        at(SttValueApu, 23),
        at(SttLimitDgpu, 24),
        at(SttValueDgpu, 25),
        at(FitLimit, 26),
        at(FitValue, 27),
        at(VidLimit, 28),
        at(VidValue, 29),
        at(Psi0LimitVdd, 30),
        at(Psi0ResidencyVdd, 31),
        at(Psi0LimitSoc, 32),
        at(Psi0ResidencySoc, 33),
        at(VddcrCpuPower, 34),
        at(VddcrSocPower, 35),
        at(VddioMemPower, 36),
        at(RocPower, 37),
        at(SocketPower, 38),
        at(Tdp, 38),
        at(PackagePower, 38),
        at(GlobFrequency, 39),
        at(StapmFrequency, 40),
        at(PptFrequencyFast, 41),
        at(PptFrequency, 42),
        at(PptFrequencyApu, 43),
        at(TdcFrequency, 44),
        at(ThmFrequency, 45),
        at(HtfmaxFrequency, 46),
        at(ProchotFrequency, 47),
        at(VoltageFrequency, 48),
        at(CcaFrequency, 49),
        at(GfxGlobFrequency, 50),
        at(GfxStapmFrequency, 51),
        at(GfxPptFrequencyFast, 52),
        at(GfxPptFrequency, 53),
        at(GfxPptFrequencyApu, 54),
        at(GfxTdcFrequency, 55),
        at(GfxThmFrequency, 56),
        at(GfxHtfmaxFrequency, 57),
        at(GfxProchotFrequency, 58),
        at(GfxVoltageFrequency, 59),
        at(GfxCcaFrequency, 60),
        at(FitVoltage, 61),
        at(LatchupVoltage, 62),
        at(CoreSetpoint, 63),
        at(CoreBusy, 64),
        at(GfxSetpoint, 65),
        at(FclkCclkSetpoint, 67),
        at(FclkCclkFreq, 68),
        at(FclkGfxSetpoint, 69),
        at(FclkGfxBusy, 70),
        at(FclkIohcSetpoint, 71),
        at(FclkIohcBusy, 72),
        at(FclkDramSetpoint, 73),
        at(FclkDramBusy, 74),
        element(LclkSetpoint, 0, 75),
        element(LclkBusy, 0, 76),
        run(FclkResidency, 77, 4),
        run(FclkFreqTable, 81, 4),
        run(UclkFreqTable, 85, 4),
        run(MemclkFreqTable, 89, 4),
        run(FclkVoltage, 93, 4),
        at(CpuSetVoltage, 97),
        at(CpuTelemetryVoltage, 98),
        at(CpuTelemetryCurrent, 99),
        at(CpuTelemetryPower, 100),
        at(SocSetVoltage, 101),
        at(SocTelemetryVoltage, 102),
        at(SocTelemetryCurrent, 103),
        at(SocTelemetryPower, 104),
        at(DfBusy, 165),
        at(VcnBusy, 166),
        at(IohcBusy, 167),
        at(MmhubBusy, 168),
        at(AthubBusy, 169),
        at(OsssysBusy, 170),
        at(HdpBusy, 171),
        at(SdmaBusy, 172),
        at(ShubBusy, 173),
        at(BifBusy, 174),
        at(AcpBusy, 175),
        at(Sst0Busy, 176),
        at(Sst1Busy, 177),
        at(Usb0Busy, 178),
        at(Usb1Busy, 179),
        at(CcmReads, 180),
        at(CcmWrites, 181),
        at(Gcm64bReads, 182),
        at(Gcm64bWrites, 183),
        at(Gcm32bReadsWrites, 184),
        at(MmhubReads, 185),
        at(MmhubWrites, 186),
        at(DceReads, 187),
        at(IoReadsWrites, 188),
        at(CsUmcReads, 189),
        at(CsUmcWrites, 190),
        at(MaxDramBandwidth, 191),
        run(CorePower, 199, 8),
        run(CoreVoltage, 207, 8),
        run(CoreTemp, 215, 8),
        run(CoreFit, 223, 8),
        run(CoreIddmax, 231, 8),
        run(CoreFreq, 239, 8),
        run(CoreFreqeff, 247, 8),
        run(CoreC0, 255, 8),
        run(CoreCc1, 263, 8),
        run(CoreCc6, 271, 8),
        run(CoreCksFdd, 279, 8),
        run(CorePstate, 287, 8),
        run(CoreCppcMax, 295, 8),
        run(CoreCppcMin, 303, 8),
        run(CoreCppcEpp, 311, 8),
        run(CoreScLimit, 319, 8),
        run(CoreScCac, 327, 8),
        run(CoreScResidency, 335, 8),
        element(L3LogicPower, 0, 343),
        element(L3VddmPower, 0, 345),
        element(L3Temp, 0, 347),
        element(L3Fit, 0, 349),
        element(L3Iddmax, 0, 351),
        element(L3Freq, 0, 353),
        element(L3FreqEff, 0, 355),
        element(L3CksFdd, 0, 357),
        element(L3CcaThreshold, 0, 359),
        element(L3CcaCac, 0, 361),
        element(L3CcaActivation, 0, 363),
        element(L3EdcLimit, 0, 365),
        element(L3EdcCac, 0, 367),
        element(L3EdcResidency, 0, 369),
        at(GfxVoltage, 369),
        at(GfxTemp, 370),
        at(GfxIddmax, 371),
        at(GfxFreq, 372),
        at(GfxFreqeff, 373),
        at(GfxBusy, 374),
        at(GfxCgpg, 375),
        at(GfxEdcLim, 376),
        at(GfxEdcResidency, 377),
        at(FclkFreq, 378),
        at(UclkFreq, 379),
        at(MemclkFreq, 380),
        at(VclkFreq, 381),
        at(DclkFreq, 382),
        at(Socclk, 383),
        element(LclkFreq, 0, 384),
        at(Shubclk, 385),
        at(Mp0clk, 386),
        at(DcfFreq, 387),
        at(FclkFreqEff, 388),
        at(UclkFreqEff, 389),
        at(MemclkFreqEff, 390),
        at(VclkFreqEff, 391),
        at(DclkFreqEff, 392),
        element(SocclkFreqEff, 0, 393),
        element(LclkFreqEff, 0, 394),
        element(ShubclkFreqEff, 0, 395),
        at(Mp0clkEff, 396),
        at(DcfFreqEff, 397),
        run(VclkState, 398, 8),
        run(DclkState, 406, 8),
        run(SocclkState, 414, 8),
        run(LclkState, 422, 8),
        run(ShubState, 430, 8),
        run(Mp0State, 438, 8),
        run(DcfclkState, 446, 8),
        run(VcnStateResidency, 454, 8),
        run(SocclkStateResidency, 462, 8),
        run(LclkStateResidency, 470, 8),
        run(ShubStateResidency, 478, 8),
        run(Mp0clkStateResidency, 486, 8),
        run(DcfclkStateResidency, 494, 8),
        run(VddcrSocVoltage, 502, 8),
        at(Cpuoff, 510),
        at(CpuoffCnt, 511),
        at(Gfxoff, 512),
        at(GfxoffCnt, 513),
        at(Vddoff, 514),
        at(VddoffCnt, 515),
        at(Ulv, 516),
        at(UlvCnt, 517),
        at(S0i2, 518),
        at(S0i2Cnt, 519),
        at(Whisper, 520),
        at(WhisperCnt, 521),
        at(Selfrefresh0, 522),
        at(Selfrefresh1, 523),
        at(PllPowerdown0, 524),
        at(PllPowerdown1, 525),
        at(PllPowerdown2, 526),
        at(PllPowerdown3, 527),
        at(DgpuPower, 530),
        at(DgpuGfxBusy, 531),
        at(DgpuFreqTarget, 532),
        at(VVddm, 533),
        at(VVddp, 534),
        at(DdrPhyPower, 535),
        at(IodVddioMemPower, 536),
        at(IoVdd18Power, 537),
        at(IoDisplayPower, 538),
        at(IoUsbPower, 539),
        at(UlvVoltage, 540),
        at(PeakTemp, 541),
        at(PeakVoltage, 542),
        at(AvgCoreCount, 543),
        at(MaxCoreVoltage, 544),
        at(DcBtc, 545),
        at(CstateBoost, 546),
        at(Prochot, 547),
        at(Pwm, 548),
        at(Fps, 549),
        at(DisplayCount, 550),
        at(StapmTimeConstant, 551),
        at(SlowPptTimeConstant, 552),
        at(Mp1clk, 553),
        at(Mp2clk, 554),
        at(Smnclk, 555),
        at(Aclk, 556),
        at(Dispclk, 557),
        at(Dprefclk, 558),
        at(Dppclk, 559),
        at(SmuBusy, 560),
        at(SmuSkipCounter, 561),
    ],
};
