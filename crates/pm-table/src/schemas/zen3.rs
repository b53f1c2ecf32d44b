// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Zen 3 desktop and APU PM table layouts.
// Author: Lukas Bower

use crate::field::ArrayField::*;
use crate::field::Field::*;
use crate::schema::{at, element, run, strided, Generation, Schema, SchemaFlags};

/// Layout reported as version `0x380804`.
pub const PM_TABLE_380804: Schema = Schema {
    version: 0x0038_0804,
    generation: Generation::Zen3,
    core_capacity: 16,
    cache_capacity: 2,
    min_size: 2212,
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
        at(CclkGlobalFreq, 30),
        at(PptFrequency, 31),
        at(TdcFrequency, 32),
        at(ThmFrequency, 33),
        at(HtfmaxFrequency, 34),
        at(ProchotFrequency, 35),
        at(VoltageFrequency, 36),
        at(CcaFrequency, 37),
        at(FitVoltage, 38),
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
        at(FclkMemLatencySetpoint, 58),
        at(FclkMemLatency, 59),
        at(FclkCclkSetpoint, 60),
        at(FclkCclkFreq, 61),
        at(FclkXgmiSetpoint, 62),
        at(FclkXgmiBusy, 63),
        at(CcmReads, 64),
        at(CcmWrites, 65),
        at(Ioms, 66),
        at(Xgmi, 67),
        at(CsUmcReads, 68),
        at(CsUmcWrites, 69),
        run(FclkResidency, 70, 4),
        run(FclkFreqTable, 74, 4),
        run(UclkFreqTable, 78, 4),
        run(MemclkFreqTable, 82, 4),
        run(FclkVoltage, 86, 4),
        strided(LclkSetpoint, 90, 4, 8),
        strided(LclkBusy, 91, 4, 8),
        strided(LclkFreq, 92, 4, 8),
        strided(LclkFreqEff, 93, 4, 8),
        strided(LclkMaxDpm, 94, 4, 8),
        strided(LclkMinDpm, 95, 4, 8),
        strided(SocclkFreqEff, 96, 4, 8),
        strided(ShubclkFreqEff, 97, 4, 8),
        at(XgmiSetpoint, 122),
        at(XgmiBusy, 123),
        at(XgmiLaneWidth, 124),
        at(XgmiDataRate, 125),
        at(SocPower, 126),
        at(SocTemp, 127),
        at(DdrVddpPower, 128),
        at(DdrVddioMemPower, 129),
        at(Gmi2VddgPower, 130),
        at(IoVddcrSocPower, 131),
        at(IodVddioMemPower, 132),
        at(IoVdd18Power, 133),
        at(Tdp, 134),
        at(Determinism, 135),
        at(VVddm, 136),
        at(VVddp, 137),
        at(VVddgIod, 138),
        at(VVddgCcd, 139),
        at(PeakTemp, 140),
        at(PeakVoltage, 141),
        at(PeakCclkFreq, 142),
        at(AvgCoreCount, 143),
        at(CclkLimit, 144),
        at(MaxSocVoltage, 145),
        at(DvoVoltage, 146),
        at(ApmlPower, 147),
        at(CpuDcBtc, 148),
        at(SocDcBtc, 149),
        at(CstateBoost, 150),
        at(Prochot, 151),
        at(Pc6, 152),
        at(SelfRefresh, 153),
        at(Pwm, 154),
        at(Socclk, 155),
        at(Shubclk, 156),
        at(Smnclk, 157),
        at(SmnclkEff, 158),
        at(Mp0clk, 159),
        at(Mp0clkEff, 160),
        at(Mp1clk, 161),
        at(Mp1clkEff, 162),
        at(Mp5clk, 163),
        at(Twixclk, 164),
        at(Waflclk, 165),
        at(DpmBusy, 166),
        at(Mp1Busy, 167),
        at(DpmSkipped, 168),
        run(CorePower, 169, 16),
        run(CoreVoltage, 185, 16),
        run(CoreTemp, 201, 16),
        run(CoreFit, 217, 16),
        run(CoreIddmax, 233, 16),
        run(CoreFreq, 249, 16),
        run(CoreFreqeff, 265, 16),
        run(CoreC0, 281, 16),
        run(CoreCc1, 297, 16),
        run(CoreCc6, 313, 16),
        run(CoreCksFdd, 329, 16),
        run(CoreCiFdd, 345, 16),
        run(CoreIrm, 361, 16),
        run(CorePstate, 377, 16),
        run(CoreFreqLimMax, 393, 16),
        run(CoreFreqLimMin, 409, 16),
        run(CoreScLimit, 425, 16),
        run(CoreScCac, 441, 16),
        run(CoreScResidency, 457, 16),
        run(CoreUopsClk, 473, 16),
        run(CoreUops, 489, 16),
        run(CoreMemLatency, 505, 16),
        run(L3LogicPower, 521, 2),
        run(L3VddmPower, 523, 2),
        run(L3Temp, 525, 2),
        run(L3Fit, 527, 2),
        run(L3Iddmax, 529, 2),
        run(L3Freq, 531, 2),
        run(L3FreqEff, 533, 2),
        run(L3CksFdd, 535, 2),
        run(L3CcaThreshold, 537, 2),
        run(L3CcaCac, 539, 2),
        run(L3CcaActivation, 541, 2),
        run(L3EdcLimit, 543, 2),
        run(L3EdcCac, 545, 2),
        run(L3EdcResidency, 547, 2),
        run(L3FllBtc, 549, 2),
        run(Mp5Busy, 551, 2),
    ],
};

/// Layout reported as version `0x380805`.
pub const PM_TABLE_380805: Schema = Schema {
    version: 0x0038_0805,
    generation: Generation::Zen3,
    core_capacity: 16,
    cache_capacity: 2,
    min_size: 2288,
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
        at(CpuTelemetryVoltage2, 41),
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
        at(FclkMemLatencySetpoint, 58),
        at(FclkMemLatency, 59),
        at(FclkCclkSetpoint, 60),
        at(FclkCclkFreq, 61),
        at(FclkXgmiSetpoint, 62),
        at(FclkXgmiBusy, 63),
        at(CcmReads, 64),
        at(CcmWrites, 65),
        at(Ioms, 66),
        at(Xgmi, 67),
        at(CsUmcReads, 68),
        at(CsUmcWrites, 69),
        run(FclkResidency, 70, 4),
        run(FclkFreqTable, 74, 4),
        run(UclkFreqTable, 78, 4),
        run(MemclkFreqTable, 82, 4),
        run(FclkVoltage, 86, 4),
        strided(LclkSetpoint, 90, 4, 8),
        strided(LclkBusy, 91, 4, 8),
        strided(LclkFreq, 92, 4, 8),
        strided(LclkFreqEff, 93, 4, 8),
        strided(LclkMaxDpm, 94, 4, 8),
        strided(LclkMinDpm, 95, 4, 8),
        strided(SocclkFreqEff, 96, 4, 8),
        strided(ShubclkFreqEff, 97, 4, 8),
        at(XgmiSetpoint, 122),
        at(XgmiBusy, 123),
        at(XgmiLaneWidth, 124),
        at(XgmiDataRate, 125),
        at(SocPower, 126),
        at(SocTemp, 127),
        at(DdrVddpPower, 128),
        at(DdrVddioMemPower, 129),
        at(Gmi2VddgPower, 130),
        at(IoVddcrSocPower, 131),
        at(IodVddioMemPower, 132),
        at(IoVdd18Power, 133),
        at(Tdp, 134),
        at(Determinism, 135),
        at(VVddm, 136),
        at(VVddp, 137),
        at(VVddgIod, 138),
        at(VVddgCcd, 139),
        at(PeakTemp, 140),
        at(PeakVoltage, 141),
        at(PeakCclkFreq, 142),
        at(AvgCoreCount, 146),
        at(CclkLimit, 147),
        at(MaxSocVoltage, 148),
        at(DvoVoltage, 149),
        at(ApmlPower, 150),
        at(CpuDcBtc, 151),
        at(SocDcBtc, 152),
        at(CstateBoost, 153),
        at(Prochot, 154),
        at(Pc6, 155),
        at(SelfRefresh, 156),
        at(Pwm, 157),
        at(Socclk, 158),
        at(Shubclk, 159),
        at(Smnclk, 160),
        at(SmnclkEff, 161),
        at(Mp0clk, 162),
        at(Mp0clkEff, 163),
        at(Mp1clk, 164),
        at(Mp1clkEff, 165),
        at(Mp5clk, 166),
        at(Twixclk, 167),
        at(Waflclk, 168),
        at(DpmBusy, 169),
        at(Mp1Busy, 170),
        at(DpmSkipped, 171),
        run(CorePower, 172, 16),
        run(CoreVoltage, 188, 16),
        run(CoreTemp, 204, 16),
        run(CoreFit, 220, 16),
        run(CoreIddmax, 236, 16),
        run(CoreFreq, 252, 16),
        run(CoreFreqeff, 268, 16),
        run(CoreC0, 284, 16),
        run(CoreCc1, 300, 16),
        run(CoreCc6, 316, 16),
        run(CoreCksFdd, 332, 16),
        run(CoreCiFdd, 348, 16),
        run(CoreIrm, 364, 16),
        run(CorePstate, 380, 16),
        run(CoreFreqLimMax, 396, 16),
        run(CoreFreqLimMin, 412, 16),
        run(CoreUnknown, 428, 16),
        run(CoreScLimit, 444, 16),
        run(CoreScCac, 460, 16),
        run(CoreScResidency, 476, 16),
        run(CoreUopsClk, 492, 16),
        run(CoreUops, 508, 16),
        run(CoreMemLatency, 524, 16),
        run(L3LogicPower, 540, 2),
        run(L3VddmPower, 542, 2),
        run(L3Temp, 544, 2),
        run(L3Fit, 546, 2),
        run(L3Iddmax, 548, 2),
        run(L3Freq, 550, 2),
        run(L3FreqEff, 552, 2),
        run(L3CksFdd, 554, 2),
        run(L3CcaThreshold, 556, 2),
        run(L3CcaCac, 558, 2),
        run(L3CcaActivation, 560, 2),
        run(L3EdcLimit, 562, 2),
        run(L3EdcCac, 564, 2),
        run(L3EdcResidency, 566, 2),
        run(L3FllBtc, 568, 2),
        run(Mp5Busy, 570, 2),
    ],
};

/// Layout reported as version `0x380904`.
pub const PM_TABLE_380904: Schema = Schema {
    version: 0x0038_0904,
    generation: Generation::Zen3,
    core_capacity: 8,
    cache_capacity: 1,
    min_size: 1444,
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
        at(CclkGlobalFreq, 30),
        at(PptFrequency, 31),
        at(TdcFrequency, 32),
        at(ThmFrequency, 33),
        at(HtfmaxFrequency, 34),
        at(ProchotFrequency, 35),
        at(VoltageFrequency, 36),
        at(CcaFrequency, 37),
        at(FitVoltage, 38),
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
        at(FclkMemLatencySetpoint, 58),
        at(FclkMemLatency, 59),
        at(FclkCclkSetpoint, 60),
        at(FclkCclkFreq, 61),
        at(FclkXgmiSetpoint, 62),
        at(FclkXgmiBusy, 63),
        at(CcmReads, 64),
        at(CcmWrites, 65),
        at(Ioms, 66),
        at(Xgmi, 67),
        at(CsUmcReads, 68),
        at(CsUmcWrites, 69),
        run(FclkResidency, 70, 4),
        run(FclkFreqTable, 74, 4),
        run(UclkFreqTable, 78, 4),
        run(MemclkFreqTable, 82, 4),
        run(FclkVoltage, 86, 4),
        strided(LclkSetpoint, 90, 4, 8),
        strided(LclkBusy, 91, 4, 8),
        strided(LclkFreq, 92, 4, 8),
        strided(LclkFreqEff, 93, 4, 8),
        strided(LclkMaxDpm, 94, 4, 8),
        strided(LclkMinDpm, 95, 4, 8),
        strided(SocclkFreqEff, 96, 4, 8),
        strided(ShubclkFreqEff, 97, 4, 8),
        at(XgmiSetpoint, 122),
        at(XgmiBusy, 123),
        at(XgmiLaneWidth, 124),
        at(XgmiDataRate, 125),
        at(SocPower, 126),
        at(SocTemp, 127),
        at(DdrVddpPower, 128),
        at(DdrVddioMemPower, 129),
        at(Gmi2VddgPower, 130),
        at(IoVddcrSocPower, 131),
        at(IodVddioMemPower, 132),
        at(IoVdd18Power, 133),
        at(Tdp, 134),
        at(Determinism, 135),
        at(VVddm, 136),
        at(VVddp, 137),
        at(VVddgIod, 138),
        at(VVddgCcd, 139),
        at(PeakTemp, 140),
        at(PeakVoltage, 141),
        at(PeakCclkFreq, 142),
        at(AvgCoreCount, 143),
        at(CclkLimit, 144),
        at(MaxSocVoltage, 145),
        at(DvoVoltage, 146),
        at(ApmlPower, 147),
        at(CpuDcBtc, 148),
        at(SocDcBtc, 149),
        at(CstateBoost, 150),
        at(Prochot, 151),
        at(Pc6, 152),
        at(SelfRefresh, 153),
        at(Pwm, 154),
        at(Socclk, 155),
        at(Shubclk, 156),
        at(Smnclk, 157),
        at(SmnclkEff, 158),
        at(Mp0clk, 159),
        at(Mp0clkEff, 160),
        at(Mp1clk, 161),
        at(Mp1clkEff, 162),
        at(Mp5clk, 163),
        at(Twixclk, 164),
        at(Waflclk, 165),
        at(DpmBusy, 166),
        at(Mp1Busy, 167),
        at(DpmSkipped, 168),
        run(CorePower, 169, 8),
        run(CoreVoltage, 177, 8),
        run(CoreTemp, 185, 8),
        run(CoreFit, 193, 8),
        run(CoreIddmax, 201, 8),
        run(CoreFreq, 209, 8),
        run(CoreFreqeff, 217, 8),
        run(CoreC0, 225, 8),
        run(CoreCc1, 233, 8),
        run(CoreCc6, 241, 8),
        run(CoreCksFdd, 249, 8),
        run(CoreCiFdd, 257, 8),
        run(CoreIrm, 265, 8),
        run(CorePstate, 273, 8),
        run(CoreFreqLimMax, 281, 8),
        run(CoreFreqLimMin, 289, 8),
        run(CoreScLimit, 297, 8),
        run(CoreScCac, 305, 8),
        run(CoreScResidency, 313, 8),
        run(CoreUopsClk, 321, 8),
        run(CoreUops, 329, 8),
        run(CoreMemLatency, 337, 8),
        element(L3LogicPower, 0, 345),
        element(L3VddmPower, 0, 346),
        element(L3Temp, 0, 347),
        element(L3Fit, 0, 348),
        element(L3Iddmax, 0, 349),
        element(L3Freq, 0, 350),
        element(L3FreqEff, 0, 351),
        element(L3CksFdd, 0, 352),
        element(L3CcaThreshold, 0, 353),
        element(L3CcaCac, 0, 354),
        element(L3CcaActivation, 0, 355),
        element(L3EdcLimit, 0, 356),
        element(L3EdcCac, 0, 357),
        element(L3EdcResidency, 0, 358),
        element(L3FllBtc, 0, 359),
        element(Mp5Busy, 0, 360),
    ],
};

/// Layout reported as version `0x380905`.
pub const PM_TABLE_380905: Schema = Schema {
    version: 0x0038_0905,
    generation: Generation::Zen3,
    core_capacity: 8,
    cache_capacity: 1,
    min_size: 1488,
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
        at(CpuTelemetryVoltage2, 41),
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
        at(FclkMemLatencySetpoint, 58),
        at(FclkMemLatency, 59),
        at(FclkCclkSetpoint, 60),
        at(FclkCclkFreq, 61),
        at(FclkXgmiSetpoint, 62),
        at(FclkXgmiBusy, 63),
        at(CcmReads, 64),
        at(CcmWrites, 65),
        at(Ioms, 66),
        at(Xgmi, 67),
        at(CsUmcReads, 68),
        at(CsUmcWrites, 69),
        run(FclkResidency, 70, 4),
        run(FclkFreqTable, 74, 4),
        run(UclkFreqTable, 78, 4),
        run(MemclkFreqTable, 82, 4),
        run(FclkVoltage, 86, 4),
        strided(LclkSetpoint, 90, 4, 8),
        strided(LclkBusy, 91, 4, 8),
        strided(LclkFreq, 92, 4, 8),
        strided(LclkFreqEff, 93, 4, 8),
        strided(LclkMaxDpm, 94, 4, 8),
        strided(LclkMinDpm, 95, 4, 8),
        strided(SocclkFreqEff, 96, 4, 8),
        strided(ShubclkFreqEff, 97, 4, 8),
        at(XgmiSetpoint, 122),
        at(XgmiBusy, 123),
        at(XgmiLaneWidth, 124),
        at(XgmiDataRate, 125),
        at(SocPower, 126),
        at(SocTemp, 127),
        at(DdrVddpPower, 128),
        at(DdrVddioMemPower, 129),
        at(Gmi2VddgPower, 130),
        at(IoVddcrSocPower, 131),
        at(IodVddioMemPower, 132),
        at(IoVdd18Power, 133),
        at(Tdp, 134),
        at(Determinism, 135),
        at(VVddm, 136),
        at(VVddp, 137),
        at(VVddgIod, 138),
        at(VVddgCcd, 139),
        at(PeakTemp, 140),
        at(PeakVoltage, 141),
        at(PeakCclkFreq, 142),
        at(AvgCoreCount, 146),
        at(CclkLimit, 147),
        at(MaxSocVoltage, 148),
        at(DvoVoltage, 149),
        at(ApmlPower, 150),
        at(CpuDcBtc, 151),
        at(SocDcBtc, 152),
        at(CstateBoost, 153),
        at(Prochot, 154),
        at(Pc6, 155),
        at(SelfRefresh, 156),
        at(Pwm, 157),
        at(Socclk, 158),
        at(Shubclk, 159),
        at(Smnclk, 160),
        at(SmnclkEff, 161),
        at(Mp0clk, 162),
        at(Mp0clkEff, 163),
        at(Mp1clk, 164),
        at(Mp1clkEff, 165),
        at(Mp5clk, 166),
        at(Twixclk, 167),
        at(Waflclk, 168),
        at(DpmBusy, 169),
        at(Mp1Busy, 170),
        at(DpmSkipped, 171),
        run(CorePower, 172, 8),
        run(CoreVoltage, 180, 8),
        run(CoreTemp, 188, 8),
        run(CoreFit, 196, 8),
        run(CoreIddmax, 204, 8),
        run(CoreFreq, 212, 8),
        run(CoreFreqeff, 220, 8),
        run(CoreC0, 228, 8),
        run(CoreCc1, 236, 8),
        run(CoreCc6, 244, 8),
        run(CoreCksFdd, 252, 8),
        run(CoreCiFdd, 260, 8),
        run(CoreIrm, 268, 8),
        run(CorePstate, 276, 8),
        run(CoreFreqLimMax, 284, 8),
        run(CoreFreqLimMin, 292, 8),
        run(CoreUnknown, 300, 8),
        run(CoreScLimit, 308, 8),
        run(CoreScCac, 316, 8),
        run(CoreScResidency, 324, 8),
        run(CoreUopsClk, 332, 8),
        run(CoreUops, 340, 8),
        run(CoreMemLatency, 348, 8),
        element(L3LogicPower, 0, 356),
        element(L3VddmPower, 0, 357),
        element(L3Temp, 0, 358),
        element(L3Fit, 0, 359),
        element(L3Iddmax, 0, 360),
        element(L3Freq, 0, 361),
        element(L3FreqEff, 0, 362),
        element(L3CksFdd, 0, 363),
        element(L3CcaThreshold, 0, 364),
        element(L3CcaCac, 0, 365),
        element(L3CcaActivation, 0, 366),
        element(L3EdcLimit, 0, 367),
        element(L3EdcCac, 0, 368),
        element(L3EdcResidency, 0, 369),
        element(L3FllBtc, 0, 370),
        element(Mp5Busy, 0, 371),
    ],
};

/// Layout reported as version `0x400005`.
pub const PM_TABLE_400005: Schema = Schema {
    version: 0x0040_0005,
    generation: Generation::Zen3,
    core_capacity: 8,
    cache_capacity: 1,
    min_size: 2372,
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
        at(GfxDemFrequency, 61),
        at(FitVoltage, 62),
        at(LatchupVoltage, 63),
        at(CoreSetpoint, 64),
        at(CoreBusy, 65),
        at(GfxSetpoint, 66),
        at(FclkCclkSetpoint, 68),
        at(FclkCclkFreq, 69),
        at(FclkGfxSetpoint, 70),
        at(FclkGfxBusy, 71),
        at(FclkIohcSetpoint, 72),
        at(FclkIohcBusy, 73),
        at(FclkDramSetpoint, 74),
        at(FclkDramBusy, 75),
        element(LclkSetpoint, 0, 76),
        element(LclkBusy, 0, 77),
        run(FclkResidency, 78, 4),
        run(FclkFreqTable, 82, 4),
        run(UclkFreqTable, 86, 4),
        run(MemclkFreqTable, 90, 4),
        run(FclkVoltage, 94, 4),
        at(CpuSetVoltage, 98),
        at(CpuTelemetryVoltage, 99),
        at(CpuTelemetryCurrent, 100),
        at(CpuTelemetryPower, 101),
        at(SocSetVoltage, 102),
        at(SocTelemetryVoltage, 103),
        at(SocTelemetryCurrent, 104),
        at(SocTelemetryPower, 105),
        at(DfBusy, 166),
        at(IohcBusy, 168),
        at(MmhubBusy, 169),
        at(AthubBusy, 170),
        at(OsssysBusy, 171),
        at(HdpBusy, 172),
        at(SdmaBusy, 173),
        at(ShubBusy, 174),
        at(BifBusy, 175),
        at(AcpBusy, 176),
        at(Sst0Busy, 177),
        at(Sst1Busy, 178),
        at(Usb0Busy, 179),
        at(Usb1Busy, 180),
        at(CcmReads, 181),
        at(CcmWrites, 182),
        at(Gcm64bReads, 183),
        at(Gcm64bWrites, 184),
        at(Gcm32bReadsWrites, 185),
        at(MmhubReads, 186),
        at(MmhubWrites, 187),
        at(DceReads, 188),
        at(IoReadsWrites, 189),
        at(CsUmcReads, 190),
        at(CsUmcWrites, 191),
        at(MaxDramBandwidth, 192),
        at(VcnBusy, 193),
        at(VcnDecode, 194),
        at(VcnEncodeGen, 195),
        at(VcnEncodeLow, 196),
        at(VcnEncodeReal, 197),
        at(VcnPg, 198),
        at(VcnJpeg, 199),
        run(CorePower, 200, 8),
        run(CoreVoltage, 208, 8),
        run(CoreTemp, 216, 8),
        run(CoreFit, 224, 8),
        run(CoreIddmax, 232, 8),
        run(CoreFreq, 240, 8),
        run(CoreFreqeff, 248, 8),
        run(CoreC0, 256, 8),
        run(CoreCc1, 264, 8),
        run(CoreCc6, 272, 8),
        run(CoreCksFdd, 280, 8),
        run(CoreCiFdd, 288, 8),
        run(CoreIrm, 296, 8),
        run(CorePstate, 304, 8),
        run(CoreCppcMax, 312, 8),
        run(CoreCppcMin, 320, 8),
        run(CoreCppcEpp, 328, 8),
        run(CoreScLimit, 336, 8),
        run(CoreScCac, 344, 8),
        run(CoreScResidency, 352, 8),
        run(CoreUopsClk, 360, 8),
        run(CoreUops, 368, 8),
        run(CoreMemLatency, 376, 8),
        element(L3LogicPower, 0, 384),
        element(L3VddmPower, 0, 385),
        element(L3Temp, 0, 386),
        element(L3Fit, 0, 387),
        element(L3Iddmax, 0, 388),
        element(L3Freq, 0, 389),
        element(L3FreqEff, 0, 390),
        element(L3CksFdd, 0, 391),
        element(L3CcaThreshold, 0, 392),
        element(L3CcaCac, 0, 393),
        element(L3CcaActivation, 0, 394),
        element(L3EdcLimit, 0, 395),
        element(L3EdcCac, 0, 396),
        element(L3EdcResidency, 0, 397),
        element(L3FllBtc, 0, 398),
        at(GfxVoltage, 399),
        at(GfxTemp, 400),
        at(GfxIddmax, 401),
        at(GfxFreq, 402),
        at(GfxFreqeff, 403),
        at(GfxBusy, 404),
        at(GfxCgpg, 405),
        at(GfxEdcLim, 406),
        at(GfxEdcResidency, 407),
        at(GfxDemResidency, 408),
        at(FclkFreq, 409),
        at(UclkFreq, 410),
        at(MemclkFreq, 411),
        at(VclkFreq, 412),
        at(DclkFreq, 413),
        at(Socclk, 414),
        element(LclkFreq, 0, 415),
        at(Shubclk, 416),
        at(Mp0clk, 417),
        at(DcfFreq, 418),
        at(FclkFreqEff, 419),
        at(UclkFreqEff, 420),
        at(MemclkFreqEff, 421),
        at(VclkFreqEff, 422),
        at(DclkFreqEff, 423),
        element(SocclkFreqEff, 0, 424),
        element(LclkFreqEff, 0, 425),
        element(ShubclkFreqEff, 0, 426),
        at(Mp0clkEff, 427),
        at(DcfFreqEff, 428),
        run(VclkState, 429, 8),
        run(DclkState, 437, 8),
        run(SocclkState, 445, 8),
        run(LclkState, 453, 8),
        run(ShubState, 461, 8),
        run(Mp0State, 469, 8),
        run(DcfclkState, 477, 8),
        run(VcnStateResidency, 485, 8),
        run(SocclkStateResidency, 493, 8),
        run(LclkStateResidency, 501, 8),
        run(ShubStateResidency, 509, 8),
        run(Mp0clkStateResidency, 517, 8),
        run(DcfclkStateResidency, 525, 8),
        run(VddcrSocVoltage, 533, 8),
        at(Cpuoff, 541),
        at(CpuoffCnt, 542),
        at(Gfxoff, 543),
        at(GfxoffCnt, 544),
        at(Vddoff, 545),
        at(VddoffCnt, 546),
        at(Ulv, 547),
        at(UlvCnt, 548),
        at(S0i2, 549),
        at(S0i2Cnt, 550),
        at(Whisper, 551),
        at(WhisperCnt, 552),
        at(Selfrefresh0, 553),
        at(Selfrefresh1, 554),
        at(PllPowerdown0, 555),
        at(PllPowerdown1, 556),
        at(PllPowerdown2, 557),
        at(PllPowerdown3, 558),
        at(PllPowerdown4, 559),
        at(DgpuPower, 561),
        at(DgpuGfxBusy, 562),
        at(DgpuFreqTarget, 563),
        at(VVddm, 564),
        at(VVddp, 565),
        at(DdrPhyPower, 566),
        at(IodVddioMemPower, 567),
        at(IoVdd18Power, 568),
        at(IoDisplayPower, 569),
        at(IoUsbPower, 570),
        at(UlvVoltage, 571),
        at(PeakTemp, 572),
        at(PeakVoltage, 573),
        at(AvgCoreCount, 574),
        at(MaxCoreVoltage, 575),
        at(DcBtc, 576),
        at(CstateBoost, 577),
        at(Prochot, 578),
        at(Pwm, 579),
        at(Fps, 580),
        at(DisplayCount, 581),
        at(StapmTimeConstant, 582),
        at(SlowPptTimeConstant, 583),
        at(Mp1clk, 584),
        at(Mp2clk, 585),
        at(Smnclk, 586),
        at(Aclk, 587),
        at(Dispclk, 588),
        at(Dprefclk, 589),
        at(Dppclk, 590),
        at(SmuBusy, 591),
        at(SmuSkipCounter, 592),
    ],
};
